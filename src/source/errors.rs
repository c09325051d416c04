/// Errors from the token-data source layer.
use thiserror::Error;

pub type SourceResult<T> = Result<T, SourceError>;

/// Typed errors from talking to the token-data service.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure: connection refused, timeout, TLS, etc.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SourceError {
    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "request_failed",
            Self::Status { .. } => "service_error",
            Self::Decode(_) => "bad_response",
            Self::InvalidUrl(_) | Self::Config(_) => "config_error",
        }
    }
}
