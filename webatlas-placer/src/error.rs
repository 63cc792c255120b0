use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaceError {
    #[error("Invalid seed domain: {0:?}")]
    InvalidSeed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlaceError>;
