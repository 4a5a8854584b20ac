//! Error types for the analysis pipeline.
//!
//! One enum covers every stage. Fetch-stage errors abort the run; the
//! translator maps its errors into per-language outcome markers instead of
//! propagating them, and the simplifier has no failure mode at all.

use thiserror::Error;

/// Errors that can occur while analyzing a policy document
#[derive(Error, Debug)]
pub enum PolicyLensError {
    /// HTTP transport error (connection refused, DNS failure, TLS, ...)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// A network call exceeded its deadline
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// The remote service answered with a non-success status
    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },

    /// Markup could not be processed
    #[error("HTML parse error: {0}")]
    HtmlParseError(String),

    /// The fetched page yielded no paragraph text to analyze
    #[error("document contains no readable paragraph text")]
    EmptyDocument,

    /// A response body did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Filesystem error while loading configuration
    #[error("IO error: {0}")]
    IoError(String),
}

impl PolicyLensError {
    /// Create an API error from a status code and response body
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// Whether this error came from a deadline expiring
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutError(_))
    }
}

impl From<reqwest::Error> for PolicyLensError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::TimeoutError(error.to_string())
        } else {
            Self::HttpError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for PolicyLensError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError(error.to_string())
    }
}

impl From<std::io::Error> for PolicyLensError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}

/// Result type for policylens operations
pub type Result<T> = std::result::Result<T, PolicyLensError>;
