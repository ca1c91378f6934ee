//! Lexicon and rule based sentiment intensity analyzer

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::SentimentBackend;
use super::intensity_lexicon::{BOOSTERS, C_INCR, NEGATIONS, N_SCALAR, VALENCES, parse_valences};
use crate::models::IntensityScores;

/// Normalization constant approximating the max expected raw sum.
const ALPHA: f64 = 15.0;

/// Per `!` amplification, capped at four marks.
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Per `?` amplification when more than one is present.
const QUESTION_INCR: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

/// Contrastive conjunction weights.
const BEFORE_BUT: f64 = 0.5;
const AFTER_BUT: f64 = 1.5;

/// Sentiment intensity analyzer.
///
/// - Lexicon tables are built once in [`IntensityAnalyzer::new`] and only read afterwards
/// - `Send + Sync`, share it behind an `Arc`
#[derive(Debug, Clone)]
pub struct IntensityAnalyzer {
  valences: HashMap<&'static str, f64>,
  boosters: HashMap<&'static str, f64>,
  negations: HashSet<&'static str>,
}

impl Default for IntensityAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}

impl IntensityAnalyzer {
  /// Builds the analyzer from the built-in lexicon
  pub fn new() -> Self {
    Self {
      valences: parse_valences(VALENCES),
      boosters: BOOSTERS.iter().copied().collect(),
      negations: NEGATIONS.iter().copied().collect(),
    }
  }

  /// Number of words with a valence
  pub fn lexicon_len(&self) -> usize {
    self.valences.len()
  }

  /// Scores `text` and returns all proportions plus the compound score.
  ///
  /// Empty or lexicon-free text yields all zeros.
  pub fn polarity_scores(&self, text: &str) -> IntensityScores {
    let words = split_words(text);
    let cap_diff = has_cap_differential(&words);

    let mut sentiments = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
      let lower = word.to_lowercase();
      if self.boosters.contains_key(lower.as_str()) {
        sentiments.push(0.0);
        continue;
      }
      if lower == "kind" && words.get(i + 1).is_some_and(|next| next.eq_ignore_ascii_case("of")) {
        sentiments.push(0.0);
        continue;
      }
      sentiments.push(self.valence_at(&words, i, cap_diff));
    }

    apply_but_weights(&words, &mut sentiments);

    let scores = score_valence(&sentiments, text);
    trace!(words = words.len(), compound = scores.compound, "intensity scored");
    scores
  }

  fn is_negated(&self, word: &str) -> bool {
    let lower = word.to_lowercase();
    self.negations.contains(lower.as_str()) || lower.contains("n't")
  }

  fn in_lexicon(&self, word: &str) -> bool {
    self.valences.contains_key(word.to_lowercase().as_str())
  }

  /// Valence of `words[i]` after booster, negation, emphasis and "least" rules.
  fn valence_at(&self, words: &[&str], i: usize, cap_diff: bool) -> f64 {
    let word = words[i];
    let lower = word.to_lowercase();
    let Some(&base) = self.valences.get(lower.as_str()) else {
      return 0.0;
    };

    // "no" directly before another scored word acts as a negator, not a sentiment
    if lower == "no" && words.get(i + 1).is_some_and(|next| self.in_lexicon(next)) {
      return 0.0;
    }

    let mut valence = base;
    if cap_diff && is_upper(word) {
      valence += C_INCR.copysign(valence);
    }

    for distance in 0..3 {
      if i <= distance {
        break;
      }
      let previous = words[i - (distance + 1)];
      if self.in_lexicon(previous) {
        continue;
      }

      let mut scalar = self.booster_scalar(previous, valence, cap_diff);
      match distance {
        1 => scalar *= 0.95,
        2 => scalar *= 0.9,
        _ => {}
      }
      valence += scalar;
      valence = self.negation_rule(valence, words, distance, i);
    }

    self.least_rule(valence, words, i)
  }

  fn booster_scalar(&self, word: &str, valence: f64, cap_diff: bool) -> f64 {
    let lower = word.to_lowercase();
    let Some(&booster) = self.boosters.get(lower.as_str()) else {
      return 0.0;
    };
    let mut scalar = if valence < 0.0 { -booster } else { booster };
    if cap_diff && is_upper(word) {
      scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
  }

  fn negation_rule(&self, valence: f64, words: &[&str], distance: usize, i: usize) -> f64 {
    let lower = |offset: usize| words[i - offset].to_lowercase();
    match distance {
      0 if self.is_negated(words[i - 1]) => valence * N_SCALAR,
      1 => {
        if lower(2) == "never" && matches!(lower(1).as_str(), "so" | "this") {
          valence * 1.25
        } else if lower(2) == "without" && lower(1) == "doubt" {
          valence
        } else if self.is_negated(words[i - 2]) {
          valence * N_SCALAR
        } else {
          valence
        }
      }
      2 => {
        let never_so = lower(3) == "never"
          && (matches!(lower(2).as_str(), "so" | "this")
            || matches!(lower(1).as_str(), "so" | "this"));
        let without_doubt =
          lower(3) == "without" && (lower(2) == "doubt" || lower(1) == "doubt");
        if never_so {
          valence * 1.25
        } else if without_doubt {
          valence
        } else if self.is_negated(words[i - 3]) {
          valence * N_SCALAR
        } else {
          valence
        }
      }
      _ => valence,
    }
  }

  fn least_rule(&self, valence: f64, words: &[&str], i: usize) -> f64 {
    if i == 0 {
      return valence;
    }
    let previous = words[i - 1];
    if !previous.eq_ignore_ascii_case("least") || self.in_lexicon(previous) {
      return valence;
    }
    if i > 1 {
      let before = words[i - 2].to_lowercase();
      if before == "at" || before == "very" {
        return valence;
      }
    }
    valence * N_SCALAR
  }
}

impl SentimentBackend for IntensityAnalyzer {
  fn score(&self, text: &str) -> f64 {
    self.polarity_scores(text).compound
  }
}

/// Splits on whitespace and strips surrounding punctuation from words.
/// Short tokens (emoticons like `:)`) are kept untouched.
fn split_words(text: &str) -> Vec<&str> {
  text
    .split_whitespace()
    .map(|token| {
      let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
      if stripped.len() <= 2 { token } else { stripped }
    })
    .collect()
}

/// At least one cased character and no lower-case ones.
fn is_upper(word: &str) -> bool {
  word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, words are shouted.
fn has_cap_differential(words: &[&str]) -> bool {
  let shouted = words.iter().filter(|w| is_upper(w)).count();
  shouted > 0 && shouted < words.len()
}

fn apply_but_weights(words: &[&str], sentiments: &mut [f64]) {
  let Some(but_index) = words.iter().position(|w| w.eq_ignore_ascii_case("but")) else {
    return;
  };
  for (index, sentiment) in sentiments.iter_mut().enumerate() {
    if index < but_index {
      *sentiment *= BEFORE_BUT;
    } else if index > but_index {
      *sentiment *= AFTER_BUT;
    }
  }
}

fn punctuation_amplifier(text: &str) -> f64 {
  let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
  let questions = text.matches('?').count();
  let question_amp = match questions {
    0 | 1 => 0.0,
    2 | 3 => questions as f64 * QUESTION_INCR,
    _ => QUESTION_MAX,
  };
  exclamations as f64 * EXCLAMATION_INCR + question_amp
}

/// `score / sqrt(score² + alpha)`, kept inside [-1, 1].
fn normalize(score: f64) -> f64 {
  (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
  let factor = 10f64.powi(places);
  (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> IntensityScores {
  if sentiments.is_empty() {
    return IntensityScores::default();
  }

  let amplifier = punctuation_amplifier(text);
  let mut sum: f64 = sentiments.iter().sum();
  if sum > 0.0 {
    sum += amplifier;
  } else if sum < 0.0 {
    sum -= amplifier;
  }
  let compound = normalize(sum);

  let mut pos_sum = 0.0;
  let mut neg_sum = 0.0;
  let mut neu_count = 0.0;
  for &s in sentiments {
    if s > 0.0 {
      pos_sum += s + 1.0;
    } else if s < 0.0 {
      neg_sum += s - 1.0;
    } else {
      neu_count += 1.0;
    }
  }

  if pos_sum > neg_sum.abs() {
    pos_sum += amplifier;
  } else if pos_sum < neg_sum.abs() {
    neg_sum -= amplifier;
  }

  let total = pos_sum + neg_sum.abs() + neu_count;
  if total == 0.0 {
    return IntensityScores::default();
  }

  IntensityScores {
    neg: round_to((neg_sum / total).abs(), 3),
    neu: round_to((neu_count / total).abs(), 3),
    pos: round_to((pos_sum / total).abs(), 3),
    compound: round_to(compound, 4),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn analyzer() -> IntensityAnalyzer {
    IntensityAnalyzer::new()
  }

  #[test]
  fn positive_text_has_positive_compound() {
    let scores = analyzer().polarity_scores("i love this");
    assert!(scores.compound > 0.05, "compound = {}", scores.compound);
    assert!((scores.compound - 0.6369).abs() < 1e-3);
    assert!(scores.pos > scores.neg);
  }

  #[test]
  fn negative_text_has_negative_compound() {
    let scores = analyzer().polarity_scores("i hate this");
    assert!(scores.compound < -0.05, "compound = {}", scores.compound);
  }

  #[test]
  fn empty_text_is_all_zero() {
    assert_eq!(analyzer().polarity_scores(""), IntensityScores::default());
    assert_eq!(analyzer().score("   "), 0.0);
  }

  #[test]
  fn text_without_lexicon_words_is_neutral() {
    let scores = analyzer().polarity_scores("the table is brown");
    assert_eq!(scores.compound, 0.0);
    assert_eq!(scores.neu, 1.0);
  }

  #[test]
  fn negation_flips_sign() {
    let plain = analyzer().score("this is good");
    let negated = analyzer().score("this is not good");
    assert!(plain > 0.0);
    assert!(negated < 0.0);
  }

  #[test]
  fn negation_without_apostrophe_is_recognized() {
    assert!(analyzer().score("i dont like it") < 0.0);
  }

  #[test]
  fn booster_increases_intensity() {
    let plain = analyzer().score("this is good");
    let boosted = analyzer().score("this is very good");
    assert!(boosted > plain);
  }

  #[test]
  fn dampener_decreases_intensity() {
    let plain = analyzer().score("this is good");
    let damped = analyzer().score("this is slightly good");
    assert!(damped < plain);
    assert!(damped > 0.0);
  }

  #[test]
  fn clause_after_but_dominates() {
    assert!(analyzer().score("the food was good but the service was terrible") < 0.0);
    assert!(analyzer().score("the food was bad but the service was great") > 0.0);
  }

  #[test]
  fn exclamation_marks_amplify() {
    let plain = analyzer().score("great");
    let excited = analyzer().score("great!!!");
    assert!(excited > plain);
  }

  #[test]
  fn shouted_word_amplifies_when_case_is_mixed() {
    let plain = analyzer().score("this is good");
    let shouted = analyzer().score("this is GOOD");
    assert!(shouted > plain);
  }

  #[test]
  fn compound_stays_in_range() {
    let text = "love love love love love love love love love love great great great";
    let compound = analyzer().score(text);
    assert!(compound <= 1.0 && compound > 0.9);
  }

  #[test]
  fn scoring_is_deterministic() {
    let a = analyzer();
    let text = "not bad at all but could be better";
    assert_eq!(a.polarity_scores(text), a.polarity_scores(text));
  }

  #[test]
  fn review_sentences_get_the_expected_sign() {
    let a = analyzer();
    for text in [
      "the food was delicious and the staff were attentive",
      "absolutely adore it highly recommended",
      "fast shipping and the fit is perfect",
    ] {
      assert!(a.score(text) > 0.05, "{text}: {}", a.score(text));
    }
    for text in [
      "product arrived damaged and the seller never refunded me",
      "cheap flimsy junk total rip off",
      "the battery died after two days and support was unhelpful",
    ] {
      assert!(a.score(text) < -0.05, "{text}: {}", a.score(text));
    }
  }

  #[test]
  fn booster_before_review_word_adds_intensity() {
    let a = analyzer();
    assert!(a.score("absolutely adore it") > a.score("adore it"));
  }

  #[test]
  fn lexicon_is_loaded_from_embedded_table() {
    assert!(analyzer().lexicon_len() > 2500);
  }
}
