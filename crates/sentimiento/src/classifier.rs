//! Score to label mapping

use crate::models::SentimentLabel;

/// Scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Maps a backend score to a label.
///
/// The same thresholds apply to both backends. Bounds are neutral.
pub fn classify(score: f64) -> SentimentLabel {
  if score > POSITIVE_THRESHOLD {
    SentimentLabel::Positive
  } else if score < NEGATIVE_THRESHOLD {
    SentimentLabel::Negative
  } else {
    SentimentLabel::Neutral
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bounds_are_neutral() {
    assert_eq!(classify(0.05), SentimentLabel::Neutral);
    assert_eq!(classify(-0.05), SentimentLabel::Neutral);
    assert_eq!(classify(0.0), SentimentLabel::Neutral);
  }

  #[test]
  fn just_outside_bounds() {
    assert_eq!(classify(0.0501), SentimentLabel::Positive);
    assert_eq!(classify(-0.0501), SentimentLabel::Negative);
  }

  #[test]
  fn extremes() {
    assert_eq!(classify(1.0), SentimentLabel::Positive);
    assert_eq!(classify(-1.0), SentimentLabel::Negative);
  }
}
