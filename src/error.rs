use thiserror::Error;

/// Unified error type for git-minver operations
#[derive(Error, Debug)]
pub enum MinVerError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a valid version: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in git-minver
pub type Result<T> = std::result::Result<T, MinVerError>;

impl MinVerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MinVerError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        MinVerError::Version(msg.into())
    }
}
