//! Models module

mod request;
mod response;

pub use request::{RequestText, SentimentRequest};
pub use response::{HomeResponse, SentimentResponse};
