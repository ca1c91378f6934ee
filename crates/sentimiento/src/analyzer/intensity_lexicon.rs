//! Built-in data for the intensity analyzer
//!
//! Valences are on a [-4, 4] scale and live in `data/intensity_valences.tsv`,
//! embedded at compile time.

use std::collections::HashMap;

use tracing::warn;

use super::data_lines;

/// Word valences, one `word<TAB>valence` pair per line.
pub(crate) const VALENCES: &str = include_str!("data/intensity_valences.tsv");

/// Parses a valence table.
///
/// Malformed lines are logged and skipped.
pub(crate) fn parse_valences(source: &'static str) -> HashMap<&'static str, f64> {
  let mut valences = HashMap::new();
  for (line_no, line) in data_lines(source) {
    let mut fields = line.split('\t');
    let parsed = match (fields.next(), fields.next(), fields.next()) {
      (Some(word), Some(valence), None) => valence.trim().parse::<f64>().ok().map(|v| (word, v)),
      _ => None,
    };
    match parsed {
      Some((word, valence)) if (-4.0..=4.0).contains(&valence) => {
        valences.insert(word, valence);
      }
      _ => warn!(line = line_no, "skipping malformed valence line"),
    }
  }
  valences
}

/// Booster words and their scalar. Negative scalars damp intensity.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
  ("absolutely", B_INCR),
  ("amazingly", B_INCR),
  ("awfully", B_INCR),
  ("completely", B_INCR),
  ("considerable", B_INCR),
  ("considerably", B_INCR),
  ("decidedly", B_INCR),
  ("deeply", B_INCR),
  ("effing", B_INCR),
  ("enormous", B_INCR),
  ("enormously", B_INCR),
  ("entirely", B_INCR),
  ("especially", B_INCR),
  ("exceptionally", B_INCR),
  ("extraordinarily", B_INCR),
  ("extreme", B_INCR),
  ("extremely", B_INCR),
  ("fabulously", B_INCR),
  ("flipping", B_INCR),
  ("frackin", B_INCR),
  ("fricking", B_INCR),
  ("frigging", B_INCR),
  ("fully", B_INCR),
  ("fuckin", B_INCR),
  ("fucking", B_INCR),
  ("greatly", B_INCR),
  ("hella", B_INCR),
  ("highly", B_INCR),
  ("hugely", B_INCR),
  ("incredibly", B_INCR),
  ("intensely", B_INCR),
  ("majorly", B_INCR),
  ("more", B_INCR),
  ("most", B_INCR),
  ("particularly", B_INCR),
  ("purely", B_INCR),
  ("quite", B_INCR),
  ("really", B_INCR),
  ("remarkably", B_INCR),
  ("so", B_INCR),
  ("substantially", B_INCR),
  ("thoroughly", B_INCR),
  ("total", B_INCR),
  ("totally", B_INCR),
  ("tremendously", B_INCR),
  ("uber", B_INCR),
  ("unbelievably", B_INCR),
  ("unusually", B_INCR),
  ("utter", B_INCR),
  ("utterly", B_INCR),
  ("very", B_INCR),
  ("almost", B_DECR),
  ("barely", B_DECR),
  ("hardly", B_DECR),
  ("kinda", B_DECR),
  ("less", B_DECR),
  ("little", B_DECR),
  ("marginal", B_DECR),
  ("marginally", B_DECR),
  ("occasional", B_DECR),
  ("occasionally", B_DECR),
  ("partly", B_DECR),
  ("scarcely", B_DECR),
  ("slight", B_DECR),
  ("slightly", B_DECR),
  ("somewhat", B_DECR),
  ("sorta", B_DECR),
];

/// Negation words (apostrophes already removed by cleaning are listed both ways).
pub(crate) const NEGATIONS: &[&str] = &[
  "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
  "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent", "isnt",
  "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't",
  "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
  "oughtnt", "shant", "shouldnt", "wasnt", "werent", "oughtn't", "shan't", "shouldn't", "wasn't",
  "weren't", "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

/// Booster increment
pub(crate) const B_INCR: f64 = 0.293;
/// Booster decrement
pub(crate) const B_DECR: f64 = -0.293;
/// Emphasis added to an all-caps word when the text mixes case
pub(crate) const C_INCR: f64 = 0.733;
/// Negation multiplier
pub(crate) const N_SCALAR: f64 = -0.74;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_valence_line_parses() {
    let rows = data_lines(VALENCES).count();
    let valences = parse_valences(VALENCES);
    assert_eq!(valences.len(), rows, "duplicate or malformed rows in the valence table");
    assert!(valences.len() > 2500);
  }

  #[test]
  fn malformed_valence_lines_are_skipped() {
    let valences = parse_valences("# header\ngood\t1.9\nbroken\nloud\tvery\nhuge\t9.5\n\nbad\t-2.5\textra\n");
    assert_eq!(valences.len(), 1);
    assert_eq!(valences["good"], 1.9);
  }

  #[test]
  fn boosters_and_negations_carry_no_valence() {
    let valences = parse_valences(VALENCES);
    for (word, _) in BOOSTERS {
      assert!(!valences.contains_key(word), "{word} is both a booster and a valence word");
    }
    for word in NEGATIONS {
      assert!(!valences.contains_key(word), "{word} is both a negation and a valence word");
    }
  }
}
