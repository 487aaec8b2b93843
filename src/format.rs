//! Report text normalization
//!
//! Model output tends to run numbered sections together on one line.
//! [`format_report`] forces each `N. ` marker onto its own line and strips
//! blank lines. The transformation is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.\s)").unwrap());

/// Normalize numbered-list formatting in report text.
///
/// Each numbered marker (`1. `, `2. `, ...) starts its own line, every line
/// is trimmed, and blank lines are removed. Text without markers passes
/// through unchanged apart from the trim and blank-line stripping.
pub fn format_report(raw: &str) -> String {
    let broken = LIST_MARKER.replace_all(raw, "\n$1");

    let formatted: Vec<&str> = broken
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    formatted.join("\n")
}
