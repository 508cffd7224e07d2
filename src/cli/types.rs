use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "blogkit")]
#[command(about = "Render blog building blocks: inline table of contents, footer and project listings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file, may be given several times
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, visible_alias = "verbose", default_value_t = false, global = true)]
    pub debug: bool,

    /// Silence everything but errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Output format for the toc command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TocFormat {
    /// HTML fragment
    Html,
    /// The filtered heading records as JSON
    Json,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render an inline table of contents for a markdown or HTML file
    #[command(alias = "t")]
    Toc {
        /// Markdown (.md) or HTML (.html) file to read headings from
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Headings at this level or deeper are indented
        #[arg(long, value_name = "DEPTH", allow_negative_numbers = true)]
        indent_depth: Option<i32>,

        /// Shallowest heading level to include
        #[arg(long = "from", value_name = "LEVEL", allow_negative_numbers = true)]
        from_heading: Option<i32>,

        /// Deepest heading level to include
        #[arg(long = "to", value_name = "LEVEL", allow_negative_numbers = true)]
        to_heading: Option<i32>,

        /// Emit the bare list instead of a collapsible disclosure
        #[arg(long, default_value_t = false)]
        no_disclosure: bool,

        /// Heading text to leave out (whole text, case-insensitive), may be repeated
        #[arg(short = 'x', long, value_name = "TEXT")]
        exclude: Vec<String>,

        /// Label of the disclosure toggle
        #[arg(long, value_name = "LABEL")]
        label: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TocFormat::Html)]
        format: TocFormat,
    },

    /// Render a markdown post to HTML with its inline table of contents on top
    #[command(alias = "r")]
    Page {
        /// Markdown file to render
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit the bare list instead of a collapsible disclosure
        #[arg(long, default_value_t = false)]
        no_disclosure: bool,
    },

    /// Print the headings of a markdown or HTML file as JSON
    #[command(alias = "h")]
    Headings {
        /// Markdown (.md) or HTML (.html) file to read headings from
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Render the site footer from the configuration
    #[command(alias = "f")]
    Footer {
        /// Copyright year (defaults to the current year)
        #[arg(long, value_name = "YEAR")]
        year: Option<i32>,
    },

    /// Render the project listing from a data file
    #[command(alias = "p")]
    Projects {
        /// Data file (defaults to <source>/_data/projects.yml)
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
}
