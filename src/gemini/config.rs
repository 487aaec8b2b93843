//! Gemini client configuration
//!
//! Credentials are sourced from the environment or supplied by the caller;
//! they are never embedded in source. Timeouts are explicit because the
//! client performs blocking-equivalent network I/O per call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default model for image report generation.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_API_VERSION: &str = "v1beta";

/// Configuration for the Google AI Studio Gemini endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio).
    pub api_key: String,

    /// Base URL of the API host.
    pub base_url: String,

    /// API version path segment.
    pub api_version: String,

    /// Model identifier used for generation requests.
    pub model: String,

    /// Total request timeout in seconds.
    pub request_timeout: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout: u64,

    /// Optional proxy URL for outbound requests.
    pub proxy_url: Option<String>,

    /// Emit request/response debug traces.
    pub debug: bool,
}

impl GeminiConfig {
    /// Create a configuration with the given API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: 120,
            connect_timeout: 10,
            proxy_url: None,
            debug: false,
        }
    }

    /// Read the API key from `GEMINI_API_KEY` or `GOOGLE_API_KEY`.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            return Ok(Self::new(api_key));
        }

        if let Ok(api_key) = std::env::var("GOOGLE_API_KEY") {
            return Ok(Self::new(api_key));
        }

        Err(Error::configuration(
            "No API key found in GEMINI_API_KEY or GOOGLE_API_KEY",
        ))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the total request timeout. The connect timeout is clamped so it
    /// never exceeds the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout = timeout_secs;
        self.connect_timeout = self.connect_timeout.min(timeout_secs);
        self
    }

    pub fn with_connect_timeout(mut self, timeout_secs: u64) -> Self {
        self.connect_timeout = timeout_secs;
        self
    }

    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::configuration("API key is required"));
        }

        if self.model.is_empty() {
            return Err(Error::configuration("Model identifier is required"));
        }

        if self.request_timeout == 0 {
            return Err(Error::configuration(
                "Request timeout must be greater than 0",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(Error::configuration(
                "Connect timeout must be greater than 0",
            ));
        }

        if self.connect_timeout > self.request_timeout {
            return Err(Error::configuration(
                "Connect timeout cannot be greater than request timeout",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// AI Studio endpoint URL for the configured model.
    ///
    /// The key travels as a query parameter, which is the AI Studio
    /// convention (Vertex AI would use a Bearer header instead).
    pub fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}?key={}",
            self.base_url, self.api_version, self.model, operation, self.api_key
        )
    }

    #[cfg(test)]
    pub fn new_test(api_key: impl Into<String>) -> Self {
        let mut config = Self::new(api_key);
        config.request_timeout = 5;
        config.connect_timeout = 2;
        config
    }
}
