//! Report generation against a mock Gemini endpoint

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use medscan::{format_report, Error, GeminiConfig, ReportGenerator};

use crate::common::{gemini_error_body, gemini_success_body, png_bytes};

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn test_generator(server: &MockServer) -> ReportGenerator {
    let config = GeminiConfig::new("test-key")
        .with_base_url(server.uri())
        .with_timeout(5);
    ReportGenerator::new(config).expect("generator construction failed")
}

#[tokio::test]
async fn test_generate_returns_response_text() {
    let server = MockServer::start().await;
    let report_text = "1. Type of scan: Chest X-ray 2. Key findings: clear lung fields";

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success_body(report_text)))
        .expect(1)
        .mount(&server)
        .await;

    let generator = test_generator(&server);
    let image = png_bytes(32, 32, [200, 200, 200]);

    let report = generator.generate(&image).await.unwrap();
    assert_eq!(report, report_text);
}

#[tokio::test]
async fn test_request_carries_prompt_and_inline_image() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success_body("ok")))
        .mount(&server)
        .await;

    let generator = test_generator(&server);
    let image = png_bytes(8, 8, [10, 20, 30]);
    generator.generate(&image).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let parts = &body["contents"][0]["parts"];

    let prompt = parts[0]["text"].as_str().unwrap();
    assert!(prompt.contains("Type of scan/image"));
    assert!(prompt.contains("Recommendations for additional imaging"));

    let inline = &parts[1]["inlineData"];
    assert_eq!(inline["mimeType"], "image/jpeg");
    assert_eq!(inline["data"], STANDARD.encode(&image));
    assert_eq!(body["contents"][0]["role"], "user");
}

#[tokio::test]
async fn test_explicit_mime_type_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success_body("ok")))
        .mount(&server)
        .await;

    let generator = test_generator(&server);
    let image = png_bytes(8, 8, [0, 0, 0]);
    generator
        .generate_with_mime(&image, "image/png")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body["contents"][0]["parts"][1]["inlineData"]["mimeType"],
        "image/png"
    );
}

#[tokio::test]
async fn test_invalid_key_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(gemini_error_body(401, "UNAUTHENTICATED", "API key not valid")),
        )
        .mount(&server)
        .await;

    let generator = test_generator(&server);
    let result = generator.generate(&png_bytes(8, 8, [0, 0, 0])).await;

    assert!(matches!(result, Err(Error::Authentication(_))));
}

#[tokio::test]
async fn test_rate_limit_carries_retry_after() {
    let server = MockServer::start().await;

    let mut body = gemini_error_body(429, "RESOURCE_EXHAUSTED", "Quota exceeded");
    body["error"]["retry_after"] = serde_json::json!(30);

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(body))
        .mount(&server)
        .await;

    let generator = test_generator(&server);
    let result = generator.generate(&png_bytes(8, 8, [0, 0, 0])).await;

    match result {
        Err(Error::RateLimit { retry_after }) => assert_eq!(retry_after, Some(30)),
        other => panic!("Expected rate limit error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_envelope_in_200_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_error_body(403, "PERMISSION_DENIED", "Forbidden")),
        )
        .mount(&server)
        .await;

    let generator = test_generator(&server);
    let result = generator.generate(&png_bytes(8, 8, [0, 0, 0])).await;

    assert!(matches!(result, Err(Error::Authentication(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    // Nothing listens on port 1.
    let config = GeminiConfig::new("test-key")
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(5);
    let generator = ReportGenerator::new(config).unwrap();

    let result = generator.generate(&png_bytes(8, 8, [0, 0, 0])).await;
    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn test_generated_report_formats_cleanly() {
    let server = MockServer::start().await;
    let run_on = "1. Type of scan: MRI 2. Key findings: none 3. Structures: normal";

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success_body(run_on)))
        .mount(&server)
        .await;

    let generator = test_generator(&server);
    let report = generator.generate(&png_bytes(8, 8, [0, 0, 0])).await.unwrap();

    let formatted = format_report(&report);
    let lines: Vec<&str> = formatted.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("1. "));
    assert!(lines[2].starts_with("3. "));
}
