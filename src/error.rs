//! Crate-wide error type
//!
//! Every fallible operation in this crate returns [`Error`]; image loading
//! and remote fetch failures are typed variants rather than logged-and-None
//! results, so callers can match on exactly what went wrong.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error for report generation, image loading, and image fetching.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded{}", retry_suffix(.retry_after))]
    RateLimit { retry_after: Option<u64> },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse model response: {0}")]
    Parse(String),

    #[error("Failed to load image {path}: {message}")]
    ImageLoad { path: PathBuf, message: String },

    #[error("Failed to decode image bytes: {0}")]
    ImageDecode(String),

    #[error("Fetch of {url} failed with HTTP status {status}")]
    FetchStatus { url: String, status: u16 },
}

fn retry_suffix(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(", retry after {}s", secs),
        None => String::new(),
    }
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn rate_limit(retry_after: Option<u64>) -> Self {
        Self::RateLimit { retry_after }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn image_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ImageLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn image_decode(message: impl Into<String>) -> Self {
        Self::ImageDecode(message.into())
    }

    pub fn fetch_status(url: impl Into<String>, status: u16) -> Self {
        Self::FetchStatus {
            url: url.into(),
            status,
        }
    }

    /// Whether the error originated on the service side (as opposed to
    /// local configuration or image handling).
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_)
                | Self::RateLimit { .. }
                | Self::Api { .. }
                | Self::Network(_)
                | Self::Parse(_)
        )
    }
}
