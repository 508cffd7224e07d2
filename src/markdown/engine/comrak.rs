use comrak::html::Anchorizer;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use log::debug;

use crate::markdown::toc::HeadingRecord;

/// Create default ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>(header_id_prefix: &str) -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.header_ids = Some(header_id_prefix.to_string());
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Parse options
    options.parse.smart = true;
    options.parse.default_info_string = Some("text".to_string());

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    comrak::markdown_to_html(content, options)
}

/// Extract heading records from markdown.
///
/// Anchors are computed the same way comrak assigns heading ids when
/// rendering, so the returned urls resolve against [`render_markdown`]
/// output produced with the same options.
pub fn extract_headings(content: &str, options: &Options) -> Vec<HeadingRecord> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, options);

    let prefix = options.extension.header_ids.clone().unwrap_or_default();
    let mut anchorizer = Anchorizer::new();
    let mut headings = Vec::new();

    for node in root.descendants() {
        let level = match node.data.borrow().value {
            NodeValue::Heading(ref heading) => heading.level,
            _ => continue,
        };

        let mut text = String::new();
        collect_text(node, &mut text);

        let anchor = anchorizer.anchorize(text.clone());
        headings.push(HeadingRecord::new(
            text,
            i32::from(level),
            format!("#{}{}", prefix, anchor),
        ));
    }

    debug!("Extracted {} headings from markdown", headings.len());
    headings
}

/// Concatenate the plain text below a node
fn collect_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match node.data.borrow().value {
        NodeValue::Text(ref literal) => output.push_str(literal),
        NodeValue::Code(ref code) => output.push_str(&code.literal),
        NodeValue::LineBreak | NodeValue::SoftBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text(child, output);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comrak_rendering() {
        let options = create_comrak_options("");
        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = render_markdown(markdown, &options);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_extract_headings() {
        let options = create_comrak_options("");
        let markdown = "# Top Heading\n\nText here.\n\n## Sub `code` Heading\n\nMore text.\n\n#### Deep";
        let headings = extract_headings(markdown, &options);

        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], HeadingRecord::new("Top Heading", 1, "#top-heading"));
        assert_eq!(headings[1].value, "Sub code Heading");
        assert_eq!(headings[1].depth, 2);
        assert_eq!(headings[2].depth, 4);
    }

    #[test]
    fn test_duplicate_headings_get_unique_anchors() {
        let options = create_comrak_options("");
        let headings = extract_headings("## Usage\n\n## Usage\n", &options);

        assert_eq!(headings[0].url, "#usage");
        assert_eq!(headings[1].url, "#usage-1");
    }

    #[test]
    fn test_prefix_is_applied() {
        let options = create_comrak_options("header-");
        let headings = extract_headings("## Setup\n", &options);
        assert_eq!(headings[0].url, "#header-setup");

        let html = render_markdown("## Setup\n", &options);
        assert!(html.contains("header-setup"));
    }

    #[test]
    fn test_code_blocks_are_not_headings() {
        let options = create_comrak_options("");
        let markdown = "# Real\n\n```sh\n# not a heading\n```\n";
        let headings = extract_headings(markdown, &options);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].value, "Real");
    }

    #[test]
    fn test_setext_headings() {
        let options = create_comrak_options("");
        let headings = extract_headings("Title\n=====\n\nSection\n-------\n", &options);
        assert_eq!(headings[0], HeadingRecord::new("Title", 1, "#title"));
        assert_eq!(headings[1].depth, 2);
    }
}
