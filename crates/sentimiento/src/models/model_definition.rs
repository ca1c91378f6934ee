//! Data Model Definition
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::SentimientoError;

/// Scoring backend selector.
///
/// Closed set of supported models. Anything else is rejected when parsing,
/// before any scoring takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentModel {
  /// Lexicon/rule-based intensity analyzer (compound score)
  #[default]
  Vader,
  /// Pattern-based polarity analyzer (polarity score)
  TextBlob,
}

impl SentimentModel {
  /// All supported models, in declaration order.
  pub const ALL: [SentimentModel; 2] = [SentimentModel::Vader, SentimentModel::TextBlob];

  /// Returns the normalized identifier echoed back to clients.
  ///
  /// - `SentimentModel::Vader` → `"vader"`
  /// - `SentimentModel::TextBlob` → `"textblob"`
  pub fn code(&self) -> &'static str {
    match self {
      SentimentModel::Vader => "vader",
      SentimentModel::TextBlob => "textblob",
    }
  }
}

impl FromStr for SentimentModel {
  type Err = SentimientoError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "vader" => Ok(Self::Vader),
      "textblob" => Ok(Self::TextBlob),
      _ => Err(SentimientoError::unsupported_model(s)),
    }
  }
}

impl fmt::Display for SentimentModel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code())
  }
}

/// Discrete sentiment label.
///
/// Serialized with the Spanish names exposed by the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
  /// Score above the positive threshold
  #[serde(rename = "Positivo")]
  Positive,
  /// Score below the negative threshold
  #[serde(rename = "Negativo")]
  Negative,
  /// Score within the neutral band (bounds included)
  #[serde(rename = "Neutral")]
  Neutral,
}

impl SentimentLabel {
  /// Label as shown to API clients
  pub fn as_str(&self) -> &'static str {
    match self {
      SentimentLabel::Positive => "Positivo",
      SentimentLabel::Negative => "Negativo",
      SentimentLabel::Neutral => "Neutral",
    }
  }
}

impl fmt::Display for SentimentLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Full output of the intensity analyzer.
///
/// `pos`, `neg` and `neu` are proportions of the text that sum to roughly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct IntensityScores {
  /// Negative proportion
  pub neg: f64,
  /// Neutral proportion
  pub neu: f64,
  /// Positive proportion
  pub pos: f64,
  /// Normalized aggregate in [-1, 1]
  pub compound: f64,
}

/// Full output of the polarity analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PolarityScores {
  /// Orientation in [-1, 1]
  pub polarity: f64,
  /// Opinion vs. fact in [0, 1]
  pub subjectivity: f64,
}

/// Result of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentOutcome {
  /// Model that produced the score
  pub model: SentimentModel,
  /// Text actually handed to the backend (after normalization)
  pub normalized_text: String,
  /// Backend score
  pub score: f64,
  /// Label derived from `score`
  pub label: SentimentLabel,
}
