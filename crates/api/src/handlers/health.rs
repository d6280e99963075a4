use super::models::AppState;
use crate::models::HealthResponse;
use axum::{extract::State, response::Json};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        sandbox_root: lms_utils::normalize_path(state.resolver.sandbox().path()),
        fuzzy_fallback: state.resolver.fuzzy_fallback(),
        metadata: state.diagnostics.backend_name().to_string(),
    })
}
