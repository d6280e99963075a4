use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::upload_settings")]
    pub uploads: UploadSettings,
    #[serde(default = "super::defaults::metadata_settings")]
    pub metadata: MetadataSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::streaming_threshold_mb")]
    pub streaming_threshold_mb: u64,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
}

/// Where uploaded files live and how lookups may fall back
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadSettings {
    #[serde(default = "super::defaults::uploads_root")]
    pub root: String,
    #[serde(default = "super::defaults::fuzzy_fallback")]
    pub fuzzy_fallback: bool,
    #[serde(default = "super::defaults::create_root")]
    pub create_root: bool,
}

/// Exported LMS records used to explain missing files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataSettings {
    #[serde(default = "super::defaults::metadata_enabled")]
    pub enabled: bool,
    #[serde(default = "super::defaults::metadata_snapshot_path")]
    pub snapshot_path: String,
}
