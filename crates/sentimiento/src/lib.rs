//! sentimiento sentiment scoring library
//!
//! Cleans free text, scores it with one of two lexicon-based analyzers and
//! maps the score to a Positivo / Negativo / Neutral label.

/// Analyzer module - IntensityAnalyzer, PolarityAnalyzer and the SentimentBackend trait
pub mod analyzer;

/// Classifier module - fixed-threshold score to label mapping
pub mod classifier;

/// Error module - SentimientoError, SentimientoResult
pub mod errors;

/// Data model module - SentimentModel, SentimentLabel and score structs
pub mod models;

/// Service module - SentimentService facade
pub mod service;

/// Text module - cleaning applied before scoring
pub mod text;

/// Re-export
pub use classifier::classify;
pub use errors::{SentimientoError, SentimientoResult};
pub use models::{SentimentLabel, SentimentModel, SentimentOutcome};
pub use service::SentimentService;
