//! Medical image report generation
//!
//! Builds a single multimodal request: a fixed eight-point analysis prompt
//! plus the image as an inline base64 part, and returns the model's text
//! response verbatim. Pair with [`crate::format::format_report`] to
//! normalize the numbered sections for display.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

use crate::error::Result;
use crate::gemini::{GeminiClient, GeminiConfig};

/// MIME type sent when the caller does not specify one.
///
/// The upstream behavior this reproduces always tagged the inline part as
/// JPEG regardless of the actual encoding; Gemini tolerates the mismatch
/// for common formats, but callers with non-JPEG input should prefer
/// [`ReportGenerator::generate_with_mime`].
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Instruction prompt for the structured report.
const REPORT_PROMPT: &str = "\
Analyze this image and provide a detailed report including:
1. Type of scan/image
2. Key findings and observations
3. Notable anatomical structures
4. Any abnormalities or pathological findings
5. Potential diagnoses based on imaging features
6. Areas requiring attention or follow-up
7. Technical quality of the image
8. Recommendations for additional imaging if needed.

All these must be at most 4 sentences each and keep good formatting in output.

Then provide a summary using medical terms for disease and injury names in 2-3 sentences.";

/// Generates structured medical-style reports for images via Gemini.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    client: GeminiClient,
}

impl ReportGenerator {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    /// Build a generator with credentials from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Generate a report for JPEG image bytes.
    pub async fn generate(&self, image: &[u8]) -> Result<String> {
        self.generate_with_mime(image, DEFAULT_MIME_TYPE).await
    }

    /// Generate a report for image bytes with an explicit MIME type.
    pub async fn generate_with_mime(&self, image: &[u8], mime_type: &str) -> Result<String> {
        let parts = build_parts(image, mime_type);
        let report = self.client.generate(parts).await?;
        tracing::debug!(chars = report.len(), "Report generated");
        Ok(report)
    }
}

fn build_parts(image: &[u8], mime_type: &str) -> Vec<Value> {
    let encoded = STANDARD.encode(image);
    vec![
        json!({ "text": REPORT_PROMPT }),
        json!({
            "inlineData": {
                "mimeType": mime_type,
                "data": encoded
            }
        }),
    ]
}
