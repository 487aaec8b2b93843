//! Local and remote image handling
//!
//! Two independent helpers: a filesystem preprocessor that produces a
//! fixed-size grayscale image, and an HTTP fetcher that decodes a remote
//! image in memory.

pub mod fetch;
pub mod preprocess;

pub use fetch::{fetch_image, ImageFetcher};
pub use preprocess::{preprocess_image, PREPROCESS_SIZE};
