//! Response model definition

use serde::Serialize;

use sentimiento::{SentimentLabel, SentimentModel, SentimentOutcome};

/// Sentiment analysis response
///
/// Field names are the Spanish ones the dashboard client reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResponse {
  /// Original text, as received
  pub texto: String,
  /// Normalized model identifier
  pub modelo: SentimentModel,
  /// Backend score
  pub score: f64,
  /// Label derived from `score`
  pub sentimiento: SentimentLabel,
}

impl SentimentResponse {
  /// Builds the response from the original text and the scoring outcome
  #[must_use]
  pub fn from_outcome(texto: impl Into<String>, outcome: SentimentOutcome) -> Self {
    Self {
      texto: texto.into(),
      modelo: outcome.model,
      score: outcome.score,
      sentimiento: outcome.label,
    }
  }
}

/// `GET /` response
#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
  /// Service announcement
  pub message: &'static str,
}
