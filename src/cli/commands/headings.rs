use std::path::Path;

use crate::cli::types::Commands;
use crate::config::Config;
use crate::markdown::read_headings;
use crate::utils::error::BoxResult;
use crate::utils::fs::write_output;

/// Handle the headings command
pub fn handle_headings_command(
    command: &Commands,
    config: &Config,
    output: Option<&Path>,
) -> BoxResult<()> {
    if let Commands::Headings { file } = command {
        let headings = read_headings(file, &config.markdown.header_id_prefix)?;
        let json = serde_json::to_string_pretty(&headings)?;
        write_output(output, &json)?;
    }

    Ok(())
}
