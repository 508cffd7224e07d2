// Module declarations
mod cli;
mod collections;
mod components;
mod config;
mod markdown;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
