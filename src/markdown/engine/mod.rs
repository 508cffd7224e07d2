mod comrak;

pub use self::comrak::{create_comrak_options, extract_headings, render_markdown};
