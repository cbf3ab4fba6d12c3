use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Required line item not found: no row label contains '{0}'")]
    MissingRequiredLineItem(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "gemini")]
    #[error("Narration request failed: {0}")]
    NarrationFailed(String),

    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, StatementError>;
