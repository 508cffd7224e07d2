mod generator;
mod parser;
mod types;

pub use generator::{filter_headings, generate_toc};
pub use parser::extract_headings_from_html;
pub use types::{Exclude, HeadingRecord, TocOptions};
