use std::fmt;
use std::path::PathBuf;

/// Result type for ghostreplay-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// Input log or context file path does not exist
    NotFound(PathBuf),

    /// Input parsed as JSON but violated a structural assumption
    Malformed(String),

    /// Requested test framework has no defined template
    UnsupportedFramework(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::NotFound(path) => write!(f, "Log file not found: {}", path.display()),
            Error::Malformed(msg) => write!(f, "Malformed input: {}", msg),
            Error::UnsupportedFramework(name) => write!(
                f,
                "Unsupported test framework '{}' (supported: {})",
                name,
                crate::generate::SUPPORTED_FRAMEWORKS.join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::NotFound(_) | Error::Malformed(_) | Error::UnsupportedFramework(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
