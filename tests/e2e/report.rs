//! E2E report generation
//!
//! Makes a real Gemini API call. Requires `GEMINI_API_KEY` or
//! `GOOGLE_API_KEY` in the environment.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

use medscan::{format_report, ReportGenerator};

fn jpeg_fixture() -> Vec<u8> {
    let img = RgbImage::from_pixel(64, 64, Rgb([180, 180, 180]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .expect("JPEG encoding failed");
    buf
}

#[tokio::test]
#[ignore]
async fn test_report_generation_live() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let generator = ReportGenerator::from_env().expect("API key not configured");

    let report = generator.generate(&jpeg_fixture()).await;
    assert!(report.is_ok(), "Report generation failed: {:?}", report.err());

    let report = report.unwrap();
    assert!(!report.is_empty());

    let formatted = format_report(&report);
    assert!(!formatted.contains("\n\n"));
}
