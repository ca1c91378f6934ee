//! HTTP handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error, info, warn};

use crate::config::SERVICE_MESSAGE;
use crate::errors::ApiError;
use crate::models::{HomeResponse, SentimentRequest, SentimentResponse};

use super::state::AppState;

/// POST /sentiment endpoint
///
/// Scores free text with the selected model.
///
/// # Request Body
/// ```json
/// { "text": "I love this!", "model": "vader" }
/// ```
///
/// # Response
/// - 200 OK: `{ "texto", "modelo", "score", "sentimiento" }`
/// - 400 Bad Request: `{ "error": "Texto no recibido" }` (body absent, malformed, or no text)
/// - 400 Bad Request: `{ "error": "Modelo no válido" }` (unknown or non-string selector)
/// - 500 Internal Server Error: internal error
pub async fn post_sentiment(
  State(state): State<AppState>,
  payload: Result<Json<SentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentResponse>, ApiError> {
  let Json(request) = payload.map_err(|rejection| {
    warn!(reason = %rejection.body_text(), "unreadable sentiment request body");
    ApiError::missing_text()
  })?;

  debug!(
    has_text = request.text().is_some(),
    model = ?request.model,
    "sentiment request received"
  );

  // Scoring is CPU bound, keep it off the async workers
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking failed");
      ApiError::internal("no se pudo ejecutar el análisis")
    })??;

  info!(
    model = %response.modelo,
    score = response.score,
    sentiment = %response.sentimiento,
    "sentiment analysis done"
  );

  Ok(Json(response))
}

/// GET / endpoint
///
/// Liveness check announcing the service.
pub async fn home() -> Json<HomeResponse> {
  Json(HomeResponse {
    message: SERVICE_MESSAGE,
  })
}
