use thiserror::Error;

/// Failures that can occur while wiring components together.
///
/// Record generation and address resolution themselves never fail; only
/// construction (HTTP client, endpoint, config) can.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type IdentityResult<T> = Result<T, IdentityError>;

/// A single address tier failed. Always recovered by the resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("request timed out: {message}")]
    Timeout { message: String },

    #[error("non-success status {status}")]
    Status { status: u16 },

    #[error("malformed response: {message}")]
    Decode { message: String },
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }
}
