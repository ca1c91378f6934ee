//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{home, post_sentiment};
pub use routes::{cors_layer, create_router, run_server};
pub use state::AppState;
