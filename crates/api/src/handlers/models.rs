use lms_resolver::{AssetResolver, DiagnosticCrossReferencer};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) resolver: Arc<AssetResolver>,
    pub(super) diagnostics: DiagnosticCrossReferencer,
    pub(super) streaming_threshold_bytes: u64,
}
