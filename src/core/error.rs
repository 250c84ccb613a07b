//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Destination path could not be opened for appending
    #[error("failed to open \"{path}\" for writing")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a file open error carrying the offending path
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }
}
