//! Pattern based polarity and subjectivity analyzer

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::SentimentBackend;
use super::polarity_lexicon::{ENTRIES, INTENSIFIERS, NEGATIONS, NEGATION_SCALAR, parse_entries};
use crate::models::PolarityScores;

#[derive(Debug, Clone, Copy)]
struct Entry {
  polarity: f64,
  subjectivity: f64,
}

/// Polarity analyzer
///
/// Averages the polarity of every scored word. An intensifier scales the
/// next scored word, a negation flips and halves it.
#[derive(Debug, Clone)]
pub struct PolarityAnalyzer {
  entries: HashMap<&'static str, Entry>,
  intensifiers: HashMap<&'static str, f64>,
  negations: HashSet<&'static str>,
}

impl Default for PolarityAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}

impl PolarityAnalyzer {
  /// Builds the analyzer from the built-in lexicon
  pub fn new() -> Self {
    Self {
      entries: parse_entries(ENTRIES)
        .into_iter()
        .map(|(word, (polarity, subjectivity))| {
          (
            word,
            Entry {
              polarity,
              subjectivity,
            },
          )
        })
        .collect(),
      intensifiers: INTENSIFIERS.iter().copied().collect(),
      negations: NEGATIONS.iter().copied().collect(),
    }
  }

  /// Number of words with a polarity
  pub fn lexicon_len(&self) -> usize {
    self.entries.len()
  }

  /// Computes polarity in [-1, 1] and subjectivity in [0, 1].
  pub fn sentiment(&self, text: &str) -> PolarityScores {
    let mut assessments: Vec<Entry> = Vec::new();
    let mut intensity: Option<f64> = None;
    let mut negated = false;

    for token in text.split_whitespace() {
      let word = token.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase();
      if word.is_empty() {
        continue;
      }

      if self.negations.contains(word.as_str()) {
        negated = true;
        continue;
      }

      if let Some(&factor) = self.intensifiers.get(word.as_str()) {
        // stacked modifiers ("very very") compound
        intensity = Some(intensity.unwrap_or(1.0) * factor);
        continue;
      }

      let Some(&entry) = self.entries.get(word.as_str()) else {
        intensity = None;
        continue;
      };

      let mut polarity = entry.polarity;
      let mut subjectivity = entry.subjectivity;
      if let Some(factor) = intensity.take() {
        polarity = (polarity * factor).clamp(-1.0, 1.0);
        subjectivity = (subjectivity * factor).clamp(0.0, 1.0);
      }
      if negated {
        polarity *= NEGATION_SCALAR;
        negated = false;
      }

      assessments.push(Entry {
        polarity,
        subjectivity,
      });
    }

    if assessments.is_empty() {
      return PolarityScores::default();
    }

    let count = assessments.len() as f64;
    let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
    let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

    trace!(assessed = assessments.len(), polarity, subjectivity, "polarity scored");

    PolarityScores {
      polarity: polarity.clamp(-1.0, 1.0),
      subjectivity: subjectivity.clamp(0.0, 1.0),
    }
  }
}

impl SentimentBackend for PolarityAnalyzer {
  fn score(&self, text: &str) -> f64 {
    self.sentiment(text).polarity
  }
}
