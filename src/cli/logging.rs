use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command-line flags
pub fn log_level(debug: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(log_level: LevelFilter) -> LevelFilter {
    // Rendered fragments go to stdout; the stderr feature keeps logs out of them
    if let Err(e) = SimpleLogger::new()
        .with_level(log_level)
        .with_colors(false)
        .init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
