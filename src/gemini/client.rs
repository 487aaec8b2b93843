//! Gemini API client
//!
//! Thin generateContent client for the Google AI Studio endpoint. One
//! request per call, explicit timeouts, no retries.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::{json, Value};

use super::config::GeminiConfig;
use super::error::{from_api_response, from_http_status};
use crate::error::{Error, Result};

/// Client for the Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout());

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Submit one user-role message built from `parts` and return the
    /// concatenated text of the first candidate.
    pub async fn generate(&self, parts: Vec<Value>) -> Result<String> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": parts
            }]
        });

        let response = self.send_request("generateContent", body).await?;
        extract_text(&response)
    }

    async fn send_request(&self, operation: &str, body: Value) -> Result<Value> {
        let url = self.config.endpoint(operation);

        if self.config.debug {
            tracing::debug!(model = %self.config.model, %operation, "Gemini request");
        }

        let response = self
            .http_client
            .post(&url)
            .headers(base_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::network("Request timeout")
                } else {
                    Error::network(format!("Network error: {}", e))
                }
            })?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| Error::network(format!("Failed to read response: {}", e)))?;

        if self.config.debug {
            tracing::debug!(status = status.as_u16(), body = %response_text, "Gemini response");
        }

        if !status.is_success() {
            return Err(from_http_status(status.as_u16(), &response_text));
        }

        let json_response: Value = serde_json::from_str(&response_text)
            .map_err(|e| Error::parse(format!("Failed to parse response JSON: {}", e)))?;

        if json_response.get("error").is_some() {
            return Err(from_api_response(&json_response));
        }

        Ok(json_response)
    }
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Join the text parts of the first candidate in a generateContent response.
fn extract_text(response: &Value) -> Result<String> {
    let candidates = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| from_api_response(response))?;

    let parts = candidates[0]
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| from_api_response(&json!({ "candidates": candidates })))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(Error::parse("Response candidate contained no text parts"));
    }

    Ok(text)
}
