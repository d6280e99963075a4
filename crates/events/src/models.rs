use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, sandbox_root: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { fuzzy_fallback: bool },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },

    // Sandbox
    SandboxCreated { path: String },
    SandboxReady { path: String },
    SandboxMissing { path: String },

    // Metadata store
    MetadataStoreReady { backend: String, location: String },
    MetadataStoreDisabled,
}

pub struct EventBus {
    #[allow(dead_code)]
    pub(super) silent_mode: bool,
}
