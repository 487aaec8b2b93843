//! Gemini error mapping
//!
//! Maps HTTP statuses and in-body error objects from the generative
//! language API onto the crate error type.

use serde_json::Value;

use crate::error::Error;

/// Map an HTTP status and raw response body to an [`Error`].
pub fn from_http_status(status: u16, body: &str) -> Error {
    match status {
        400 => Error::api(400, format!("Bad request: {}", body)),
        401 => Error::authentication("Invalid or missing API key"),
        403 => Error::authentication("Forbidden: insufficient permissions"),
        404 => Error::api(404, "Model or endpoint not found"),
        429 => Error::rate_limit(extract_retry_after(body)),
        500..=599 => Error::api(status, format!("Server error: {}", body)),
        _ => Error::api(status, body.to_string()),
    }
}

/// Map an `error` object embedded in a 200-level JSON response.
pub fn from_api_response(response: &Value) -> Error {
    if let Some(error) = response.get("error") {
        let code = error.get("code").and_then(|c| c.as_u64()).unwrap_or(500) as u16;
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        let status = error.get("status").and_then(|s| s.as_str()).unwrap_or("");

        return match (code, status) {
            (401, _) | (_, "UNAUTHENTICATED") => Error::authentication(message),
            (403, _) | (_, "PERMISSION_DENIED") => Error::authentication(message),
            (429, _) | (_, "RESOURCE_EXHAUSTED") => {
                Error::rate_limit(extract_retry_after_from_error(error))
            }
            _ => Error::api(code, message),
        };
    }

    // Candidates that carry only a finish reason indicate blocked content.
    if let Some(candidate) = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
    {
        if let Some(finish_reason) = candidate.get("finishReason").and_then(|r| r.as_str()) {
            return match finish_reason {
                "SAFETY" => Error::api(200, "Content blocked by safety filters"),
                "RECITATION" => Error::api(200, "Content blocked due to recitation"),
                other => Error::api(500, format!("Unexpected finish reason: {}", other)),
            };
        }
    }

    Error::api(500, "Unknown API error")
}

fn extract_retry_after(body: &str) -> Option<u64> {
    let json: Value = serde_json::from_str(body).ok()?;
    if let Some(error) = json.get("error") {
        return extract_retry_after_from_error(error);
    }
    json.get("retry_after").and_then(Value::as_u64)
}

fn extract_retry_after_from_error(error: &Value) -> Option<u64> {
    if let Some(retry_after) = error.get("retry_after").and_then(Value::as_u64) {
        return Some(retry_after);
    }

    error
        .get("details")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .find_map(|detail| detail.get("retry_after").and_then(Value::as_u64))
}
