//! Google Gemini provider
//!
//! Configuration and client for the Google AI Studio generateContent
//! endpoint. Supports text and inline image (base64) parts.

pub mod client;
pub mod config;
pub mod error;

pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_MODEL};
