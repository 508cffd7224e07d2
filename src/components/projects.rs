use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::info;
use serde::{Deserialize, Serialize};

use crate::collections::data::load_data_file;
use crate::utils::error::BoxResult;

/// A portfolio entry shown in the project listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Preview image path or URL
    #[serde(default, alias = "imgSrc")]
    pub img_src: Option<String>,

    /// Link to the project
    #[serde(default)]
    pub href: Option<String>,
}

impl Project {
    fn to_html(&self) -> String {
        let title = encode_text(&self.title);
        let mut html = String::from("<article class=\"project-card\">\n");

        if let Some(img_src) = &self.img_src {
            html.push_str(&format!(
                "<img class=\"project-image\" src=\"{}\" alt=\"{}\">\n",
                encode_double_quoted_attribute(img_src),
                encode_double_quoted_attribute(&self.title)
            ));
        }

        match &self.href {
            Some(href) => html.push_str(&format!(
                "<h2 class=\"project-title\"><a href=\"{}\">{}</a></h2>\n",
                encode_double_quoted_attribute(href),
                title
            )),
            None => html.push_str(&format!("<h2 class=\"project-title\">{}</h2>\n", title)),
        }

        html.push_str(&format!(
            "<p class=\"project-description\">{}</p>\n",
            encode_text(&self.description)
        ));
        html.push_str("</article>\n");
        html
    }
}

/// Load the project list from a YAML or JSON data file
pub fn load_projects(path: &Path) -> BoxResult<Vec<Project>> {
    let projects: Vec<Project> = load_data_file(path)?;
    info!("Loaded {} projects from {}", projects.len(), path.display());
    Ok(projects)
}

/// Render the project listing section
pub fn render_projects(projects: &[Project]) -> String {
    let mut html = String::from("<section class=\"projects\">\n");
    for project in projects {
        html.push_str(&project.to_html());
    }
    html.push_str("</section>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;

    fn sample() -> Vec<Project> {
        vec![
            Project {
                title: "webpack-alioss-plugin".to_string(),
                description: "Upload build output to OSS".to_string(),
                img_src: Some("/static/images/webpack-alioss-plugin.png".to_string()),
                href: Some("https://github.com/example/webpack-alioss-plugin".to_string()),
            },
            Project {
                title: "Notes & Drafts".to_string(),
                description: String::new(),
                img_src: None,
                href: None,
            },
        ]
    }

    #[test]
    fn test_render_projects() {
        let html = render_projects(&sample());

        assert!(html.starts_with("<section class=\"projects\">"));
        assert_eq!(html.matches("<article class=\"project-card\">").count(), 2);
        assert!(html.contains(
            "<img class=\"project-image\" src=\"/static/images/webpack-alioss-plugin.png\" alt=\"webpack-alioss-plugin\">"
        ));
        assert!(html.contains(
            "<a href=\"https://github.com/example/webpack-alioss-plugin\">webpack-alioss-plugin</a>"
        ));
        assert!(html.contains("<h2 class=\"project-title\">Notes &amp; Drafts</h2>"));
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render_projects(&[]), "<section class=\"projects\">\n</section>");
    }

    #[test]
    fn test_load_projects_accepts_camel_case_image_key() {
        let dir = std::env::temp_dir().join(format!("blogkit-projects-{}", std::process::id()));
        let path = dir.join("projects.yml");
        write_file(
            &path,
            "- title: SVGAPlayer-for-Live\n  description: SVGA player for live gifts\n  imgSrc: /static/images/svga.gif\n  href: https://github.com/example/svga\n- title: Survey\n",
        ).unwrap();

        let projects = load_projects(&path).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].img_src.as_deref(), Some("/static/images/svga.gif"));
        assert_eq!(projects[1].description, "");
        assert!(projects[1].href.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
