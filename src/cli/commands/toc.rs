use std::path::Path;
use log::{debug, info, warn};

use crate::cli::types::{Commands, TocFormat};
use crate::config::Config;
use crate::markdown::toc::{filter_headings, Exclude, TocOptions};
use crate::markdown::{generate_toc, read_headings};
use crate::utils::error::BoxResult;
use crate::utils::fs::write_output;

/// Handle the toc command
pub fn handle_toc_command(
    command: &Commands,
    config: &Config,
    output: Option<&Path>,
) -> BoxResult<()> {
    if let Commands::Toc { file, format, .. } = command {
        let options = toc_options(command, &config.toc);
        debug!("TOC options: {:?}", options);

        let headings = read_headings(file, &config.markdown.header_id_prefix)?;

        let rendered = match format {
            TocFormat::Html => {
                let toc = generate_toc(&headings, &options);
                if toc.list().is_empty() {
                    warn!("No headings of {} matched the table of contents options", file.display());
                }
                info!("Rendered table of contents with {} entries", toc.list().len());
                toc.to_html()
            }
            TocFormat::Json => serde_json::to_string_pretty(&filter_headings(&headings, &options))?,
        };

        write_output(output, &rendered)?;
    }

    Ok(())
}

/// Apply command-line overrides on top of the configured TOC defaults
fn toc_options(command: &Commands, defaults: &TocOptions) -> TocOptions {
    let mut options = defaults.clone();

    if let Commands::Toc {
        indent_depth,
        from_heading,
        to_heading,
        no_disclosure,
        exclude,
        label,
        ..
    } = command
    {
        if let Some(depth) = indent_depth {
            options.indent_depth = *depth;
        }
        if let Some(level) = from_heading {
            options.from_heading = *level;
        }
        if let Some(level) = to_heading {
            options.to_heading = *level;
        }
        if *no_disclosure {
            options.as_disclosure = false;
        }
        if !exclude.is_empty() {
            options.exclude = Exclude::Many(exclude.clone());
        }
        if let Some(label) = label {
            options.label = label.clone();
        }
    }

    options
}
