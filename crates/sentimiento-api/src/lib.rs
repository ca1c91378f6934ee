//! sentimiento-api crate
//!
//! Web server providing sentiment scoring as HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Service announcement / liveness
//! - `POST /sentiment` - Sentiment analysis (`vader` or `textblob`)
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/sentiment \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "I love this!", "model": "vader"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{HomeResponse, RequestText, SentimentRequest, SentimentResponse};
pub use service::SentimentApiServiceFull;
