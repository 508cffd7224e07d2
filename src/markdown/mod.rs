pub mod engine;
pub mod toc;

use std::path::Path;

use log::info;

use crate::utils::error::{BlogkitError, BoxResult};
use crate::utils::fs::{get_extension, read_file};

pub use engine::create_comrak_options;
pub use toc::{extract_headings_from_html, generate_toc, HeadingRecord, TocOptions};

/// Markdown file extensions recognised when reading headings
pub const MARKDOWN_EXTENSIONS: [&str; 4] = ["md", "markdown", "mkd", "mkdn"];

/// HTML file extensions recognised when reading headings
pub const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Extract heading records from a markdown string
pub fn extract_markdown_headings(content: &str, header_id_prefix: &str) -> Vec<HeadingRecord> {
    let options = create_comrak_options(header_id_prefix);
    engine::extract_headings(content, &options)
}

/// Render a markdown post with its inline table of contents in front of the
/// body. Both come from the same comrak options, so every TOC link resolves
/// to a heading id in the body.
pub fn render_page(content: &str, header_id_prefix: &str, toc_options: &TocOptions) -> String {
    let options = create_comrak_options(header_id_prefix);
    let headings = engine::extract_headings(content, &options);
    let toc = generate_toc(&headings, toc_options);

    format!("{}\n{}", toc.to_html(), engine::render_markdown(content, &options))
}

/// Read a markdown or HTML file and extract its headings, choosing the
/// extraction method from the file extension
pub fn read_headings<P: AsRef<Path>>(path: P, header_id_prefix: &str) -> BoxResult<Vec<HeadingRecord>> {
    let path = path.as_ref();
    let extension = get_extension(path).unwrap_or_default();

    let headings = if MARKDOWN_EXTENSIONS.contains(&extension.as_str()) {
        extract_markdown_headings(&read_file(path)?, header_id_prefix)
    } else if HTML_EXTENSIONS.contains(&extension.as_str()) {
        extract_headings_from_html(&read_file(path)?)
    } else {
        return Err(BlogkitError::Markdown(format!(
            "Unsupported file type for heading extraction: {}", path.display()
        )).into());
    };

    info!("Found {} headings in {}", headings.len(), path.display());
    Ok(headings)
}
