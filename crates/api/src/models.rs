use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sandbox_root: String,
    pub fuzzy_fallback: bool,
    /// Backend used for 404 diagnostics (`json-file`, `disabled`)
    pub metadata: String,
}
