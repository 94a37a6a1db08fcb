//! Observability error type

/// Errors raised while setting up logging
#[derive(Debug, thiserror::Error, Clone)]
pub enum ObservabilityError {
    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// Subscriber or filter failure
    #[error("Logging error: {message}")]
    Logging {
        /// What went wrong
        message: String,
    },

    /// Filesystem failure while preparing the log file
    #[error("IO error: {message}")]
    Io {
        /// Underlying error text
        message: String,
    },
}

impl ObservabilityError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Error category
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Logging { .. } => "logging",
            Self::Io { .. } => "io",
        }
    }
}

impl From<std::io::Error> for ObservabilityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, ObservabilityError>;
