//! Remote image fetching

use std::time::Duration;

use image::DynamicImage;
use reqwest::{Client, ClientBuilder};
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_REQUEST_TIMEOUT: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// HTTP fetcher that decodes remote images in memory.
///
/// Only an HTTP 200 response is treated as success; no redirect-specific
/// handling, caching, or retries beyond what the HTTP client does by
/// default.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    http_client: Client,
}

impl ImageFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http_client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT))
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// GET `url` and decode the body as an image.
    pub async fn fetch(&self, url: &str) -> Result<DynamicImage> {
        let parsed =
            Url::parse(url).map_err(|e| Error::configuration(format!("Invalid URL: {}", e)))?;

        let response = self
            .http_client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::network(format!("Failed to fetch {}: {}", url, e)))?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::warn!(%url, status, "Image fetch returned non-200 status");
            return Err(Error::fetch_status(url, status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::network(format!("Failed to read body of {}: {}", url, e)))?;

        image::load_from_memory(&bytes).map_err(|e| Error::image_decode(e.to_string()))
    }
}

/// Fetch a remote image with default timeouts.
pub async fn fetch_image(url: &str) -> Result<DynamicImage> {
    ImageFetcher::new()?.fetch(url).await
}
