//! # medscan
//!
//! Structured medical-style image reports via the Google Gemini API, plus
//! two standalone image helpers: a local preprocessor (256x256 grayscale)
//! and a remote fetcher (HTTP GET + in-memory decode).
//!
//! The four operations are independent and stateless; none of them calls
//! another. All fallible paths return the crate's [`Error`] type — nothing
//! is swallowed into a silent `None`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medscan::{format_report, ReportGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads GEMINI_API_KEY (or GOOGLE_API_KEY) from the environment.
//!     let generator = ReportGenerator::from_env()?;
//!
//!     let image = std::fs::read("scan.jpg")?;
//!     let report = generator.generate(&image).await?;
//!
//!     println!("{}", format_report(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Image helpers
//!
//! ```rust,no_run
//! use medscan::{fetch_image, preprocess_image};
//!
//! # async fn run() -> Result<(), medscan::Error> {
//! // 256x256 single-channel grayscale from a local file.
//! let gray = preprocess_image("scan.jpg")?;
//!
//! // Decoded image from a URL; non-200 statuses are typed errors.
//! let remote = fetch_image("https://example.com/scan.png").await?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod gemini;
pub mod imaging;
pub mod report;

pub use error::{Error, Result};
pub use format::format_report;
pub use gemini::{GeminiClient, GeminiConfig};
pub use imaging::{fetch_image, preprocess_image, ImageFetcher};
pub use report::ReportGenerator;
