use std::fmt;
use std::io;

/// Errors raised at the edges of the program (terminal, settings, signals).
///
/// Masonry transitions themselves are total and never produce one.
#[derive(Debug)]
pub enum MasonryError {
    /// Terminal setup, drawing or teardown failed
    Terminal(io::Error),
    /// Invalid or unreadable settings
    Config(String),
    /// Malformed JSON settings or snapshot input
    Json(serde_json::Error),
    /// Signal handler could not be installed
    Signal(String),
}

impl fmt::Display for MasonryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasonryError::Terminal(err) => write!(f, "Terminal error: {}", err),
            MasonryError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MasonryError::Json(err) => write!(f, "JSON error: {}", err),
            MasonryError::Signal(msg) => write!(f, "Signal handler error: {}", msg),
        }
    }
}

impl std::error::Error for MasonryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MasonryError::Terminal(err) => Some(err),
            MasonryError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MasonryError {
    fn from(err: io::Error) -> Self {
        MasonryError::Terminal(err)
    }
}

impl From<serde_json::Error> for MasonryError {
    fn from(err: serde_json::Error) -> Self {
        MasonryError::Json(err)
    }
}

impl From<ctrlc::Error> for MasonryError {
    fn from(err: ctrlc::Error) -> Self {
        MasonryError::Signal(err.to_string())
    }
}

/// Result type alias for program-level operations
pub type MasonryResult<T> = Result<T, MasonryError>;
