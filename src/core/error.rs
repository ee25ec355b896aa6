use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IdxError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The feed returned a status other than 200 OK.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not the JSON document we expected.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A sender or recipient address could not be parsed.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The alert email could not be assembled.
    #[error("Email build error: {0}")]
    Email(#[from] lettre::error::Error),

    /// The SMTP session failed (connection, TLS upgrade, authentication or submission).
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// A configuration value was missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}
