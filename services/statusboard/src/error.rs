//! Error types for the statusboard service

/// Errors that can occur in the statusboard service
#[derive(Debug, thiserror::Error)]
pub enum StatusboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Response parse error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for statusboard operations
pub type Result<T> = std::result::Result<T, StatusboardError>;
