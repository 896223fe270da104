use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a valid key-value object: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage is unavailable")]
    Unavailable,
}
