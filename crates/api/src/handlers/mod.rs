mod models;
mod state;
mod health;
pub mod files;

pub use models::AppState;
pub use health::health;
pub use files::serve_upload;

use axum::{routing::get, Router};

/// Routes served by the asset server, without middleware
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/uploads", get(serve_upload))
        .route("/uploads/", get(serve_upload))
        .route("/uploads/*path", get(serve_upload))
        .with_state(state)
}
