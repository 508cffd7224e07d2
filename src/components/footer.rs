use chrono::Datelike;
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;

use crate::config::{Config, IcpRecord, SocialLinks};

/// Social networks the footer knows how to link to, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Mail,
    Github,
    Juejin,
    Zhihu,
    Linkedin,
    Twitter,
}

impl SocialKind {
    pub const ALL: [SocialKind; 6] = [
        SocialKind::Mail,
        SocialKind::Github,
        SocialKind::Juejin,
        SocialKind::Zhihu,
        SocialKind::Linkedin,
        SocialKind::Twitter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SocialKind::Mail => "mail",
            SocialKind::Github => "github",
            SocialKind::Juejin => "juejin",
            SocialKind::Zhihu => "zhihu",
            SocialKind::Linkedin => "linkedin",
            SocialKind::Twitter => "twitter",
        }
    }

    /// The configured account for this network, if any
    fn account<'a>(&self, social: &'a SocialLinks) -> Option<&'a str> {
        let value = match self {
            SocialKind::Mail => &social.email,
            SocialKind::Github => &social.github,
            SocialKind::Juejin => &social.juejin,
            SocialKind::Zhihu => &social.zhihu,
            SocialKind::Linkedin => &social.linkedin,
            SocialKind::Twitter => &social.twitter,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    fn href(&self, account: &str) -> String {
        match self {
            SocialKind::Mail => format!("mailto:{}", account),
            _ => account.to_string(),
        }
    }
}

/// A single rendered social link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

/// Site footer: social links, byline and optional registration notice
#[derive(Debug, Clone)]
pub struct Footer {
    pub links: Vec<SocialLink>,
    pub author: Option<String>,
    pub title: String,
    pub icp_record: Option<IcpRecord>,
}

impl Footer {
    pub fn from_config(config: &Config) -> Self {
        let links: Vec<SocialLink> = SocialKind::ALL
            .iter()
            .filter_map(|kind| {
                kind.account(&config.social).map(|account| SocialLink {
                    kind: *kind,
                    href: kind.href(account),
                })
            })
            .collect();

        debug!("Footer has {} social links", links.len());

        Footer {
            links,
            author: config.author.clone(),
            title: config.title.clone(),
            icp_record: config.icp_record.clone(),
        }
    }

    /// Render the footer for the current year
    pub fn to_html(&self) -> String {
        self.render(chrono::Local::now().year())
    }

    /// Render the footer with an explicit copyright year
    pub fn render(&self, year: i32) -> String {
        let mut html = String::from("<footer class=\"site-footer\">\n");

        html.push_str("<div class=\"social-links\">\n");
        for link in &self.links {
            let name = link.kind.name();
            html.push_str(&format!(
                "<a class=\"social-link social-{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>\n",
                name,
                encode_double_quoted_attribute(&link.href),
                name,
                name
            ));
        }
        html.push_str("</div>\n");

        let mut byline: Vec<String> = Vec::new();
        if let Some(author) = &self.author {
            byline.push(format!("<span>{}</span>", encode_text(author)));
        }
        byline.push(format!("<span>© {}</span>", year));
        byline.push(format!("<a href=\"/\">{}</a>", encode_text(&self.title)));

        html.push_str("<div class=\"byline\">");
        html.push_str(&byline.join("<span> • </span>"));
        html.push_str("</div>\n");

        if let Some(record) = &self.icp_record {
            html.push_str(&format!(
                "<a class=\"icp-record\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>\n",
                encode_double_quoted_attribute(&record.href),
                encode_text(&record.label)
            ));
        }

        html.push_str("</footer>");
        html
    }
}
