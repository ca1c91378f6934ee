//! crates/sentimiento/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: Clean text -> Dispatch to backend -> Score -> Label.

use std::str::FromStr;

use sentimiento::analyzer::SentimentBackend;
use sentimiento::classifier::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use sentimiento::{SentimentLabel, SentimentModel, SentimentService, SentimientoError, classify};

/// Sample texts with the label both backends agree on.
fn labelled_samples() -> Vec<(&'static str, SentimentLabel)> {
  vec![
    ("I love this!", SentimentLabel::Positive),
    ("What a great and wonderful day.", SentimentLabel::Positive),
    ("I hate this.", SentimentLabel::Negative),
    ("This was a terrible, awful experience", SentimentLabel::Negative),
    ("The package arrived on Tuesday", SentimentLabel::Neutral),
  ]
}

#[test]
fn both_models_label_samples() {
  let service = SentimentService::new();

  for model in SentimentModel::ALL {
    for (text, expected) in labelled_samples() {
      let outcome = service.analyze(text, model);
      assert_eq!(outcome.label, expected, "model={model} text={text:?} score={}", outcome.score);
    }
  }
}

/// Customer review sentences, as the dashboard sends them.
fn review_samples() -> Vec<(&'static str, SentimentLabel)> {
  vec![
    ("The food was delicious and the staff were attentive.", SentimentLabel::Positive),
    ("Absolutely adore it, highly recommended!", SentimentLabel::Positive),
    ("Product arrived damaged and the seller never refunded me.", SentimentLabel::Negative),
    ("Cheap flimsy junk, total rip off.", SentimentLabel::Negative),
    ("Terrible customer service, rude and unprofessional.", SentimentLabel::Negative),
    ("Comfortable, stylish and durable. Great value.", SentimentLabel::Positive),
  ]
}

#[test]
fn both_models_label_review_sentences() {
  let service = SentimentService::new();

  for model in SentimentModel::ALL {
    for (text, expected) in review_samples() {
      let outcome = service.analyze(text, model);
      assert_eq!(outcome.label, expected, "model={model} text={text:?} score={}", outcome.score);
    }
  }
}

#[test]
fn label_is_consistent_with_score() {
  let service = SentimentService::new();

  for model in SentimentModel::ALL {
    for (text, _) in labelled_samples().into_iter().chain(review_samples()) {
      let outcome = service.analyze(text, model);
      assert!((-1.0..=1.0).contains(&outcome.score));
      let expected = if outcome.score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
      } else if outcome.score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
      } else {
        SentimentLabel::Neutral
      };
      assert_eq!(outcome.label, expected);
      assert_eq!(classify(outcome.score), outcome.label);
    }
  }
}

#[test]
fn repeated_calls_are_identical() {
  let service = SentimentService::new();
  for model in SentimentModel::ALL {
    let first = service.analyze("Not bad at all, but the ending was boring", model);
    let second = service.analyze("Not bad at all, but the ending was boring", model);
    assert_eq!(first, second);
  }
}

#[test]
fn selector_parsing_matches_dispatch() {
  let service = SentimentService::new();

  for selector in ["vader", "VADER", "Vader"] {
    let outcome = service.analyze_with_selector("I love this!", Some(selector)).unwrap();
    assert_eq!(outcome.model, SentimentModel::Vader);
  }
  for selector in ["textblob", "TEXTBLOB", "TextBlob"] {
    let outcome = service.analyze_with_selector("I love this!", Some(selector)).unwrap();
    assert_eq!(outcome.model, SentimentModel::TextBlob);
  }

  assert!(matches!(
    SentimentModel::from_str("bert"),
    Err(SentimientoError::UnsupportedModel { .. })
  ));
}

#[test]
fn service_is_shareable_across_threads() {
  let service = std::sync::Arc::new(SentimentService::new());

  let handles: Vec<_> = (0..4)
    .map(|_| {
      let service = service.clone();
      std::thread::spawn(move || service.analyze("great job", SentimentModel::Vader).score)
    })
    .collect();

  let scores: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
  assert!(scores.windows(2).all(|w| w[0] == w[1]));
  assert!(scores[0] > 0.0);
}

#[test]
fn backends_are_usable_as_trait_objects() {
  let service = SentimentService::new();
  let backends: Vec<&dyn SentimentBackend> =
    SentimentModel::ALL.iter().map(|&m| service.backend(m)).collect();
  for backend in backends {
    assert_eq!(backend.score(""), 0.0);
  }
}
