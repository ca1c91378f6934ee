// crates/sentimiento/src/service.rs

//! SentimentService: facade of the sentimiento crate.
//!
//! - Text cleaning (`text::clean_text`)
//! - Backend dispatch (`SentimentModel` → analyzer)
//! - Labeling (`classifier::classify`)
//!
//! HTTP layers and other callers only need this struct.

use std::str::FromStr;

use tracing::debug;

use crate::analyzer::{IntensityAnalyzer, PolarityAnalyzer, SentimentBackend};
use crate::classifier::classify;
use crate::errors::SentimientoResult;
use crate::models::{SentimentModel, SentimentOutcome};
use crate::text::clean_text;

/// Facade over both analyzers.
///
/// Build once at startup; every method takes `&self` and nothing is mutated
/// afterwards, so one instance can serve all requests concurrently.
#[derive(Debug, Clone, Default)]
pub struct SentimentService {
  intensity: IntensityAnalyzer,
  polarity: PolarityAnalyzer,
}

impl SentimentService {
  /// Builds both analyzers (lexicon tables are loaded here)
  pub fn new() -> Self {
    let service = Self {
      intensity: IntensityAnalyzer::new(),
      polarity: PolarityAnalyzer::new(),
    };
    debug!(
      intensity_words = service.intensity.lexicon_len(),
      polarity_words = service.polarity.lexicon_len(),
      "sentiment analyzers ready"
    );
    service
  }

  /// Backend serving `model`
  pub fn backend(&self, model: SentimentModel) -> &dyn SentimentBackend {
    match model {
      SentimentModel::Vader => &self.intensity,
      SentimentModel::TextBlob => &self.polarity,
    }
  }

  /// Intensity analyzer (full `pos`/`neg`/`neu`/`compound` output)
  pub fn intensity(&self) -> &IntensityAnalyzer {
    &self.intensity
  }

  /// Polarity analyzer (full polarity/subjectivity output)
  pub fn polarity(&self) -> &PolarityAnalyzer {
    &self.polarity
  }

  /// Cleans `raw`, scores it with `model` and labels the score.
  ///
  /// Text that is empty after cleaning scores 0.0 without reaching a backend.
  pub fn analyze(&self, raw: &str, model: SentimentModel) -> SentimentOutcome {
    let normalized_text = clean_text(raw);
    let score = if normalized_text.is_empty() {
      0.0
    } else {
      self.backend(model).score(&normalized_text)
    };
    let label = classify(score);

    debug!(%model, score, %label, "text scored");

    SentimentOutcome {
      model,
      normalized_text,
      score,
      label,
    }
  }

  /// Same as [`analyze`](Self::analyze) but resolves a textual selector first.
  ///
  /// `None` selects the default model.
  ///
  /// # Errors
  /// `SentimientoError::UnsupportedModel` when the selector names no backend.
  /// No scoring happens in that case.
  pub fn analyze_with_selector(
    &self,
    raw: &str,
    selector: Option<&str>,
  ) -> SentimientoResult<SentimentOutcome> {
    let model = match selector {
      Some(s) => SentimentModel::from_str(s)?,
      None => SentimentModel::default(),
    };
    Ok(self.analyze(raw, model))
  }
}
