pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(logging::log_level(cli.debug, cli.quiet));

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match load_site_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let output = cli.output.as_deref();

    let result = match &cli.command {
        types::Commands::Toc { .. } => commands::handle_toc_command(&cli.command, &config, output),
        types::Commands::Page { .. } => commands::handle_page_command(&cli.command, &config, output),
        types::Commands::Headings { .. } => commands::handle_headings_command(&cli.command, &config, output),
        types::Commands::Footer { .. } => commands::handle_footer_command(&cli.command, &config, output),
        types::Commands::Projects { .. } => commands::handle_projects_command(&cli.command, &config, output),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Load the site configuration for the source directory given on the command line
fn load_site_config(cli: &types::Cli) -> BoxResult<Config> {
    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let config_files = if cli.config.is_empty() {
        None
    } else {
        Some(cli.config.clone())
    };

    config::load_config(source, config_files)
}
