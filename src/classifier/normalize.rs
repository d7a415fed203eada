// src/classifier/normalize.rs
// Input normalization shared by every classification path

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on normalized text, counted in characters rather than bytes
/// so multi-byte Portuguese input is not cut short.
pub const MAX_CHARS: usize = 4000;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse every whitespace run to a single space, trim, and cap at
/// [`MAX_CHARS`]. Empty input yields the empty string. Keyword matching
/// only ever sees text that went through here, so a phrase pushed past
/// the cap is invisible to the classifiers.
pub fn normalize(raw: &str) -> String {
    let collapsed = RE_WHITESPACE.replace_all(raw, " ");
    let trimmed = collapsed.trim();
    if trimmed.chars().count() > MAX_CHARS {
        trimmed.chars().take(MAX_CHARS).collect()
    } else {
        trimmed.to_string()
    }
}
