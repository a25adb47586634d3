use thiserror::Error;

/// Error types for PubMed search operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error
    #[error("API error: {message}")]
    ApiError { message: String },
}

pub type Result<T> = std::result::Result<T, PubMedError>;
