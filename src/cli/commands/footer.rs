use std::path::Path;
use log::info;

use crate::cli::types::Commands;
use crate::components::Footer;
use crate::config::Config;
use crate::utils::error::BoxResult;
use crate::utils::fs::write_output;

/// Handle the footer command
pub fn handle_footer_command(
    command: &Commands,
    config: &Config,
    output: Option<&Path>,
) -> BoxResult<()> {
    if let Commands::Footer { year } = command {
        let footer = Footer::from_config(config);
        let html = match year {
            Some(year) => footer.render(*year),
            None => footer.to_html(),
        };

        write_output(output, &html)?;
        info!("Rendered footer with {} social links", footer.links.len());
    }

    Ok(())
}
