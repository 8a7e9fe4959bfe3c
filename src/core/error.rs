//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error, surfaced only by explicit `flush()`; the emission path
    /// treats stderr writes as always succeeding.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}
