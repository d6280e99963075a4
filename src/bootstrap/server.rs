use lms_events::{AppEvent, EventBus};
use lms_config::Config;
use lms_filesystem::FileSystem;
use lms_metadata::{DisabledStore, JsonFileStore, MetadataStore};
use lms_resolver::SandboxRoot;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Resolves the uploads root to an absolute path, creating it if configured to
pub async fn initialize_sandbox(config: &Config, events: &Arc<EventBus>) -> Result<SandboxRoot> {
    let root = FileSystem::get_absolute_path(Path::new(&config.uploads.root))?;
    let display = root.display().to_string();

    if config.uploads.create_root {
        if FileSystem::ensure_directory(&root, "Uploads root").await? {
            events.emit(AppEvent::SandboxCreated { path: display.clone() });
        }
        events.emit(AppEvent::SandboxReady { path: display });
    } else if root.is_dir() {
        events.emit(AppEvent::SandboxReady { path: display });
    } else {
        events.emit(AppEvent::SandboxMissing { path: display });
    }

    Ok(SandboxRoot::new(root))
}

/// Builds the process-wide metadata store handle used for 404 diagnostics
pub fn initialize_metadata_store(config: &Config, events: &Arc<EventBus>) -> Result<Arc<dyn MetadataStore>> {
    if !config.metadata.enabled {
        events.emit(AppEvent::MetadataStoreDisabled);
        return Ok(Arc::new(DisabledStore) as Arc<dyn MetadataStore>);
    }

    let path = FileSystem::get_absolute_path(Path::new(&config.metadata.snapshot_path))?;
    if !path.exists() {
        tracing::warn!(
            "Metadata snapshot '{}' does not exist yet, 404 diagnostics will be empty until it does",
            path.display()
        );
    }

    let store = JsonFileStore::new(path);
    events.emit(AppEvent::MetadataStoreReady {
        backend: store.backend_name().to_string(),
        location: store.path().display().to_string(),
    });

    Ok(Arc::new(store) as Arc<dyn MetadataStore>)
}
