use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Sectoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Sectoc operations
#[derive(Debug)]
pub enum SectocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Document parsing error
    Parse(String),
    /// Two section markers resolved to the same hierarchical path
    DuplicateSection(String),
    /// Document structure error
    Document(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for SectocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectocError::Io(err) => write!(f, "IO error: {}", err),
            SectocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SectocError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SectocError::DuplicateSection(path) => write!(f, "Duplicate section ID: {}", path),
            SectocError::Document(msg) => write!(f, "Document error: {}", msg),
            SectocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SectocError {}

impl From<io::Error> for SectocError {
    fn from(err: io::Error) -> Self {
        SectocError::Io(err)
    }
}

impl From<String> for SectocError {
    fn from(msg: String) -> Self {
        SectocError::Generic(msg)
    }
}

impl From<&str> for SectocError {
    fn from(msg: &str) -> Self {
        SectocError::Generic(msg.to_string())
    }
}
