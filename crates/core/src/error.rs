//! Error types for the archipel clustering library.

use thiserror::Error;

/// Primary error type for clustering and report export operations.
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience Result type alias for ClusterError.
pub type Result<T> = std::result::Result<T, ClusterError>;
