use std::path::Path;
use log::info;

use crate::cli::types::Commands;
use crate::config::Config;
use crate::markdown::{render_page, MARKDOWN_EXTENSIONS};
use crate::utils::error::{BlogkitError, BoxResult};
use crate::utils::fs::{get_extension, read_file, write_output};

/// Handle the page command
pub fn handle_page_command(
    command: &Commands,
    config: &Config,
    output: Option<&Path>,
) -> BoxResult<()> {
    if let Commands::Page { file, no_disclosure } = command {
        let extension = get_extension(file).unwrap_or_default();
        if !MARKDOWN_EXTENSIONS.contains(&extension.as_str()) {
            return Err(BlogkitError::Markdown(format!(
                "Only markdown files can be rendered as pages: {}", file.display()
            )).into());
        }

        let mut toc_options = config.toc.clone();
        if *no_disclosure {
            toc_options.as_disclosure = false;
        }

        let html = render_page(&read_file(file)?, &config.markdown.header_id_prefix, &toc_options);
        write_output(output, &html)?;
        info!("Rendered page {}", file.display());
    }

    Ok(())
}
