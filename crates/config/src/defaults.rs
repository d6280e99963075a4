/// Default values for configuration fields

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    60
}

pub fn max_concurrent_requests() -> usize {
    1000
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn streaming_threshold_mb() -> u64 {
    16  // Files larger than 16MB are streamed instead of read into memory
}

pub fn enable_compression() -> bool {
    true
}

// Upload defaults
pub fn uploads_root() -> String {
    "public/uploads".to_string()
}

pub fn fuzzy_fallback() -> bool {
    true
}

pub fn create_root() -> bool {
    true
}

pub fn upload_settings() -> super::models::UploadSettings {
    super::models::UploadSettings {
        root: uploads_root(),
        fuzzy_fallback: fuzzy_fallback(),
        create_root: create_root(),
    }
}

// Metadata defaults
pub fn metadata_enabled() -> bool {
    true
}

pub fn metadata_snapshot_path() -> String {
    "data/metadata.json".to_string()
}

pub fn metadata_settings() -> super::models::MetadataSettings {
    super::models::MetadataSettings {
        enabled: metadata_enabled(),
        snapshot_path: metadata_snapshot_path(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# LMS Uploads Configuration
# ===============================================================================

[server]
# Network
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 8080                          # Server port

# Performance
tcp_nodelay = true                   # Disable Nagle's algorithm (lower latency)
timeout_secs = 60                    # Request timeout in seconds
max_concurrent_requests = 1000       # Max simultaneous requests
streaming_threshold_mb = 16          # Files >16MB streamed, smaller files read in one go
enable_compression = true            # HTTP compression (gzip/brotli/deflate)

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://lms.example.com"] for production

# ===============================================================================
# UPLOADS
# ===============================================================================
[uploads]
root = "public/uploads"              # Sandbox root (relative to working directory if not absolute)
fuzzy_fallback = true                # Match timestamp-prefixed / re-punctuated names on exact miss
create_root = true                   # Create the root directory at startup if missing

# ===============================================================================
# METADATA CROSS-REFERENCE (diagnostics only)
# ===============================================================================
[metadata]
enabled = true                       # Explain 404s using exported LMS records
snapshot_path = "data/metadata.json" # JSON export: {"traineeDocuments": [...], "courses": [...]}
"#;
