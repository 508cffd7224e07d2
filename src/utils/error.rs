use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Blogkit operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Blogkit operations
#[derive(Debug)]
pub enum BlogkitError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Markdown or HTML heading extraction error
    Markdown(String),
    /// Data file error
    Data(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for BlogkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogkitError::Io(err) => write!(f, "IO error: {}", err),
            BlogkitError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BlogkitError::Markdown(msg) => write!(f, "Markdown error: {}", msg),
            BlogkitError::Data(msg) => write!(f, "Data error: {}", msg),
            BlogkitError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for BlogkitError {}

impl From<io::Error> for BlogkitError {
    fn from(err: io::Error) -> Self {
        BlogkitError::Io(err)
    }
}
