use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellarError {
    #[error("Wine not found: {0}")]
    WineNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid wine: {0}")]
    Validation(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CellarError>;
