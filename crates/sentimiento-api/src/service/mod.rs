//! Service module

mod sentiment_api_service;

pub use sentiment_api_service::{SentimentApiService, SentimentApiServiceFull};
