//! Sentiment Analysis Service

use sentimiento::SentimentService;
use tracing::warn;

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{SentimentRequest, SentimentResponse};

/// Common interface for the sentiment analysis service
///
/// This trait allows swapping production implementation (`SentimentApiServiceFull`) with
/// test stubs/mocks.
pub trait SentimentApiService: Send + Sync {
  /// Validates the request, scores the text and labels it
  ///
  /// # Errors
  /// - Missing or empty text
  /// - Text length exceeded
  /// - Unsupported model selector
  fn analyze(&self, request: SentimentRequest) -> Result<SentimentResponse>;
}

/// Sentiment Analysis Service
///
/// Holds the analyzers built at startup; they are only read afterwards.
#[derive(Debug, Clone)]
pub struct SentimentApiServiceFull {
  inner: SentimentService,
  max_text_length: usize,
}

impl SentimentApiServiceFull {
  /// Initializes the service (builds both analyzers)
  ///
  /// # Arguments
  /// * `config` - Configuration (text length limit)
  #[must_use]
  pub fn new(config: &Config) -> Self {
    Self {
      inner: SentimentService::new(),
      max_text_length: config.max_text_length,
    }
  }

  /// Executes sentiment analysis
  ///
  /// Checks run in this order, and each failure stops before scoring:
  /// 1. text present and non-empty
  /// 2. text within the length limit
  /// 3. model selector is a supported string (absent selects the default)
  ///
  /// A non-string `text` passes the presence check, is scored as empty text
  /// and is echoed back as its JSON rendering.
  ///
  /// # Errors
  /// - `ApiError::MissingText`
  /// - `ApiError::TextTooLong`
  /// - `ApiError::InvalidModel`
  pub fn analyze(&self, request: SentimentRequest) -> Result<SentimentResponse> {
    let Some(text) = request.text() else {
      warn!("request without text");
      return Err(ApiError::missing_text());
    };

    let texto = text.echo();
    let text_bytes = texto.len();
    if text_bytes > self.max_text_length {
      warn!(text_bytes, max = self.max_text_length, "text too long");
      return Err(ApiError::text_too_long(text_bytes, self.max_text_length));
    }

    let selector = request.model().inspect_err(|_| {
      warn!(model = ?request.model, "model selector is not a string");
    })?;

    let outcome = self.inner.analyze_with_selector(text.as_str(), selector).inspect_err(|err| {
      warn!(error = %err, "unsupported model");
    })?;

    Ok(SentimentResponse::from_outcome(texto, outcome))
  }
}

/// Production implementation of trait `SentimentApiService`
impl SentimentApiService for SentimentApiServiceFull {
  fn analyze(&self, request: SentimentRequest) -> Result<SentimentResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    SentimentApiServiceFull::analyze(self, request)
  }
}
