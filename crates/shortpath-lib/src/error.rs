use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the shortpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an algorithm name does not match any known strategy.
    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// Raised when a line of the adjacency description cannot be parsed.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Graph input file could not be located at the resolved path.
    #[error("graph input not found at {path}")]
    InputNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}
