//! E2E tests requiring real API keys
//!
//! Run with: `cargo test -- --ignored`

mod report;
