// Re-export all public APIs from the workspace crates

pub use lms_models::*;
pub use lms_events::*;
pub use lms_utils::*;
pub use lms_filesystem::*;
pub use lms_config::*;
pub use lms_metadata::*;
pub use lms_resolver::*;
pub use lms_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Metadata records
    pub use lms_models::{Course, MetadataSnapshot, TraineeDocument};

    // Events
    pub use lms_events::{AppEvent, EventBus};

    // Configuration
    pub use lms_config::Config;

    // Metadata store
    pub use lms_metadata::{DisabledStore, JsonFileStore, MetadataStore};

    // Resolution
    pub use lms_resolver::{AssetResolver, CanonicalKey, DiagnosticCrossReferencer, Resolution, SandboxRoot};

    // HTTP
    pub use lms_api::{routes, AppState};

    // Filesystem
    pub use lms_filesystem::FileSystem;
}
