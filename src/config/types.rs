use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::markdown::toc::TocOptions;

/// Social accounts linked from the footer
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SocialLinks {
    /// Contact email address, rendered as a `mailto:` link
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub juejin: Option<String>,

    #[serde(default)]
    pub zhihu: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub twitter: Option<String>,
}

/// Site registration notice shown at the bottom of the footer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IcpRecord {
    pub label: String,
    pub href: String,
}

/// Markdown processing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownConfig {
    /// Prefix prepended to every generated heading id
    #[serde(default = "defaults::default_header_id_prefix")]
    pub header_id_prefix: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            header_id_prefix: defaults::default_header_id_prefix(),
        }
    }
}

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source directory for the site
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Data directory, relative to the source
    #[serde(default = "defaults::default_data_dir")]
    pub data_dir: PathBuf,

    /// Site title
    #[serde(default = "defaults::default_site_title")]
    pub title: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Canonical site URL
    #[serde(default)]
    pub site_url: Option<String>,

    #[serde(default)]
    pub social: SocialLinks,

    #[serde(default)]
    pub icp_record: Option<IcpRecord>,

    /// Defaults for the inline table of contents
    #[serde(default)]
    pub toc: TocOptions,

    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            data_dir: defaults::default_data_dir(),
            title: defaults::default_site_title(),
            author: None,
            description: None,
            site_url: None,
            social: SocialLinks::default(),
            icp_record: None,
            toc: TocOptions::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

impl Config {
    /// Data directory resolved against the source directory
    pub fn data_path(&self) -> PathBuf {
        self.source.join(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::Exclude;

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
title: Michael's Blog
author: Michael
social:
  email: me@example.com
  github: https://github.com/example
icp_record:
  label: ICP 123
  href: http://beian.miit.gov.cn/
toc:
  as_disclosure: false
  exclude: [Introduction, FAQ]
markdown:
  header_id_prefix: "h-"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.title, "Michael's Blog");
        assert_eq!(config.author.as_deref(), Some("Michael"));
        assert_eq!(config.social.email.as_deref(), Some("me@example.com"));
        assert!(config.social.twitter.is_none());
        assert_eq!(config.icp_record.unwrap().label, "ICP 123");
        assert!(!config.toc.as_disclosure);
        assert_eq!(config.toc.indent_depth, 3);
        assert_eq!(config.toc.exclude, Exclude::from(vec!["Introduction", "FAQ"]));
        assert_eq!(config.markdown.header_id_prefix, "h-");
        assert_eq!(config.data_dir, PathBuf::from("_data"));
    }

    #[test]
    fn test_data_path() {
        let config = Config {
            source: PathBuf::from("site"),
            ..Config::default()
        };
        assert_eq!(config.data_path(), PathBuf::from("site/_data"));
    }
}
