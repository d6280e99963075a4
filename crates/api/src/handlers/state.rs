use super::models::AppState;
use lms_resolver::{AssetResolver, DiagnosticCrossReferencer};
use std::sync::Arc;

impl AppState {
    pub fn new(
        resolver: Arc<AssetResolver>,
        diagnostics: DiagnosticCrossReferencer,
        streaming_threshold_bytes: u64,
    ) -> Self {
        Self {
            resolver,
            diagnostics,
            streaming_threshold_bytes,
        }
    }
}
