//! Router definition

use axum::{
  Router,
  http::{Method, header},
  routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{home, post_sentiment};
use super::state::AppState;
use crate::errors::ApiError;

/// Cross-origin policy: any origin, no credentials
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(home))
    .route("/sentiment", post(post_sentiment))
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("no se pudo enlazar {addr}: {e}")))?;

  tracing::info!("server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("error del servidor: {e}")))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{SentimentRequest, SentimentResponse};
  use crate::service::SentimentApiService;

  /// Dummy for router construction (never scores)
  #[derive(Clone)]
  struct DummyService;

  impl SentimentApiService for DummyService {
    fn analyze(&self, _request: SentimentRequest) -> ApiResult<SentimentResponse> {
      Err(ApiError::missing_text())
    }
  }

  fn create_test_state() -> AppState {
    let service = Arc::new(DummyService) as Arc<dyn SentimentApiService>;
    AppState::new(Config::default(), service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
  }
}
