use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open store for volume '{volume}': {reason}")]
    StorageOpen { volume: String, reason: String },

    #[error("Write to volume '{volume}' failed: {reason}")]
    StorageWrite { volume: String, reason: String },

    #[error("Scan of volume '{volume}' failed: {reason}")]
    StorageRead { volume: String, reason: String },
}

pub type Result<T> = std::result::Result<T, IndexError>;
