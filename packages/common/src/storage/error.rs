use thiserror::Error;

/// Errors from artifact storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested artifact does not exist.
    #[error("artifact not found: {0}")]
    NotFound(String),
    /// An I/O error occurred while reading or writing an artifact.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A client-supplied filename failed validation.
    #[error("invalid filename: {0}")]
    InvalidFilename(&'static str),
}
