use thiserror::Error;

/// Errors that can occur while handling a generation request
#[derive(Error, Debug)]
pub enum RequestError {
    /// Request field failed its minimum-length constraint
    #[error("{field} must be at least {min} characters")]
    Validation { field: &'static str, min: usize },

    /// Failed to reach the AI provider
    #[error("Provider request failed: {0}")]
    Provider(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider response did not carry the expected fields
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
