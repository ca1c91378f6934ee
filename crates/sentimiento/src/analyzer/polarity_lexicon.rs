//! Built-in data for the polarity analyzer
//!
//! The word table lives in `data/polarity_entries.tsv`, embedded at compile time.

use std::collections::HashMap;

use tracing::warn;

use super::data_lines;

/// `word<TAB>polarity<TAB>subjectivity` rows.
pub(crate) const ENTRIES: &str = include_str!("data/polarity_entries.tsv");

/// Parses a polarity table into `word -> (polarity, subjectivity)`.
///
/// Malformed or out of range rows are logged and skipped.
pub(crate) fn parse_entries(source: &'static str) -> HashMap<&'static str, (f64, f64)> {
  let mut entries = HashMap::new();
  for (line_no, line) in data_lines(source) {
    let fields: Vec<&str> = line.split('\t').collect();
    let parsed = match fields.as_slice() {
      [word, polarity, subjectivity] => {
        match (polarity.trim().parse::<f64>(), subjectivity.trim().parse::<f64>()) {
          (Ok(p), Ok(s)) if (-1.0..=1.0).contains(&p) && (0.0..=1.0).contains(&s) => {
            Some((*word, (p, s)))
          }
          _ => None,
        }
      }
      _ => None,
    };
    match parsed {
      Some((word, scores)) => {
        entries.insert(word, scores);
      }
      None => warn!(line = line_no, "skipping malformed polarity line"),
    }
  }
  entries
}

/// (modifier, intensity) applied to the next scored word
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
  ("very", 1.3),
  ("really", 1.2),
  ("extremely", 1.5),
  ("highly", 1.4),
  ("exceptionally", 1.5),
  ("remarkably", 1.3),
  ("truly", 1.2),
  ("especially", 1.2),
  ("utterly", 1.5),
  ("completely", 1.3),
  ("thoroughly", 1.3),
  ("overly", 1.3),
  ("most", 1.3),
  ("more", 1.2),
  ("incredibly", 1.5),
  ("so", 1.3),
  ("too", 1.3),
  ("quite", 1.1),
  ("super", 1.4),
  ("totally", 1.3),
  ("absolutely", 1.4),
  ("pretty", 1.1),
  ("rather", 1.0),
  ("fairly", 0.8),
  ("somewhat", 0.8),
  ("slightly", 0.5),
  ("barely", 0.4),
  ("kinda", 0.7),
  ("sorta", 0.7),
  ("little", 0.7),
];

/// Words that flip the next scored word
pub(crate) const NEGATIONS: &[&str] = &[
  "not", "never", "no", "dont", "didnt", "doesnt", "isnt", "wasnt", "arent", "werent", "cant",
  "cannot", "wont", "wouldnt", "shouldnt", "couldnt", "hardly", "without", "don't", "didn't",
  "doesn't", "isn't", "wasn't", "aren't", "weren't", "can't", "won't", "wouldn't", "shouldn't",
  "couldn't",
];

/// Multiplier for negated polarity
pub(crate) const NEGATION_SCALAR: f64 = -0.5;
