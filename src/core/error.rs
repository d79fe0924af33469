//! Error types for the logger system
//!
//! These only surface on construction and configuration paths. Emitting a
//! message never returns an error.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log file could not be opened for appending
    #[error("Unable to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Unknown log level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Settings could not be decoded
    #[error("Invalid console settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// Another logger already owns the `log` facade
    #[error("A logger has already been installed for the log facade")]
    LoggerAlreadySet,
}

impl LoggerError {
    /// Create a file open error with the offending path
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}
