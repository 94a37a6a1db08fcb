use thiserror::Error;

/// Message used when a failed response carries no readable error text
pub const DEFAULT_API_ERROR: &str = "Failed to get response from Vic";

/// Unified error type for LLM operations
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("OpenAI API key not found. Please add your API key in settings.")]
    MissingCredential,

    #[error("network error: {0}")]
    Network(String),

    /// Non-success status. `message` is whatever could be read from the body.
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_API_ERROR))]
    Api { status: u16, message: Option<String> },

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error(transparent)]
    Transform(#[from] ConversionError),

    #[error("malformed structured response: {0}")]
    MalformedResponse(String),

    #[error("config error: {0}")]
    Config(String),
}

impl LLMError {
    /// Replace an unreadable API error body with a call-site specific message
    pub fn or_fallback(self, fallback: &str) -> Self {
        match self {
            LLMError::Api { status, message: None } => LLMError::Api {
                status,
                message: Some(fallback.to_string()),
            },
            other => other,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LLMError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LLMError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LLMError::Timeout
        } else {
            LLMError::Network(e.to_string())
        }
    }
}

/// Error during schema transformation
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response format from OpenAI")]
    MissingField(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, LLMError>;
