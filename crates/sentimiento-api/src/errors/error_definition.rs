//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use sentimiento::SentimientoError;

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Body absent, malformed, or without text
  MissingText,
  /// Model selector outside the supported set
  InvalidModel,
  /// Text longer than the configured limit
  TextTooLong,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Machine readable code (used in logs)
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::MissingText => "missing_text",
      Self::InvalidModel => "invalid_model",
      Self::TextTooLong => "text_too_long",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::MissingText | Self::InvalidModel | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
///
/// The `Display` text is what clients receive in the `error` field.
#[derive(Debug, Error)]
pub enum ApiError {
  /// No text received
  #[error("Texto no recibido")]
  MissingText,

  /// Unsupported model
  #[error("Modelo no válido")]
  InvalidModel(String),

  /// Text too long
  #[error("Texto demasiado largo: {0} bytes (máximo: {1} bytes)")]
  TextTooLong(usize, usize),

  /// Internal error
  #[error("Error interno: {0}")]
  Internal(String),

  /// Configuration error
  #[error("Error de configuración: {0}")]
  Config(String),
}

impl ApiError {
  /// Error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::MissingText => ApiErrorKind::MissingText,
      Self::InvalidModel(_) => ApiErrorKind::InvalidModel,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a missing text error
  #[must_use]
  pub fn missing_text() -> Self {
    Self::MissingText
  }

  /// Creates an invalid model error carrying the rejected selector
  #[must_use]
  pub fn invalid_model(selector: impl Into<String>) -> Self {
    Self::InvalidModel(selector.into())
  }

  /// Creates a text too long error
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON body of an error response
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!(code = self.code(), error = %self, "request failed");
    } else {
      debug!(code = self.code(), %status, "request rejected");
    }
    let body = ErrorResponse {
      error: self.to_string(),
    };

    (status, Json(body)).into_response()
  }
}

/// SentimientoError to ApiError
///
/// Maps domain errors onto API errors.
impl From<SentimientoError> for ApiError {
  fn from(err: SentimientoError) -> Self {
    match err {
      SentimientoError::UnsupportedModel { model } => ApiError::invalid_model(model),
      // #[non_exhaustive]: variants added later surface as internal errors
      _ => ApiError::internal(err.to_string()),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
