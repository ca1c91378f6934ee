//! analyzer module
pub mod intensity;
mod intensity_lexicon;
pub mod polarity;
mod polarity_lexicon;

/// Re-export
pub use intensity::IntensityAnalyzer;
pub use polarity::PolarityAnalyzer;

/// Common interface of the scoring backends
///
/// Implementations are pure functions of their input: the same text always
/// yields the same score, and nothing is mutated while scoring.
pub trait SentimentBackend: Send + Sync {
  /// Signed score in [-1, 1]
  fn score(&self, text: &str) -> f64;
}

/// Data lines of an embedded lexicon table with their 1-based line numbers.
///
/// Blank lines and `#` comments are skipped.
pub(crate) fn data_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
  source
    .lines()
    .enumerate()
    .map(|(index, line)| (index + 1, line.trim_end()))
    .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
