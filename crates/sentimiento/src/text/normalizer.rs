//! Text cleaning applied before scoring

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

static NON_ALPHANUMERIC: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static alphanumeric pattern"));

/// Cleans raw input for the scoring backends.
///
/// Steps, in order:
/// 1. Lower-case
/// 2. Collapse each whitespace run into a single space
/// 3. Drop every character that is not an ASCII letter, digit or whitespace
/// 4. Trim both ends
///
/// # Examples
/// ```
/// use sentimiento::text::clean_text;
/// assert_eq!(clean_text("  I LOVE   this!! "), "i love this");
/// ```
pub fn clean_text(raw: &str) -> String {
  let lowered = raw.to_lowercase();
  let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
  let stripped = NON_ALPHANUMERIC.replace_all(&collapsed, "");
  stripped.trim().to_string()
}

/// Cleans optional input; absent input yields an empty string.
pub fn clean_optional(raw: Option<&str>) -> String {
  raw.map(clean_text).unwrap_or_default()
}
