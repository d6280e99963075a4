use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use std::path::Path;
use std::sync::Arc;

/// 1 TiB; anything above means "never stream"
const MAX_STREAMING_THRESHOLD_MB: u64 = 1024 * 1024;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<lms_events::EventBus>>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        // Migrate config if needed
        migrate_config_if_needed(path, events).await?;

        // Read and parse config
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidConfig("server.port must not be 0".to_string()));
        }
        if self.server.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.server.streaming_threshold_mb > MAX_STREAMING_THRESHOLD_MB {
            return Err(ConfigError::InvalidConfig(format!(
                "server.streaming_threshold_mb must be at most {}",
                MAX_STREAMING_THRESHOLD_MB
            )));
        }
        if self.uploads.root.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("uploads.root must not be empty".to_string()));
        }
        if self.metadata.enabled && self.metadata.snapshot_path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "metadata.snapshot_path must be set when metadata is enabled".to_string(),
            ));
        }
        Ok(())
    }

    pub fn streaming_threshold_bytes(&self) -> u64 {
        self.server.streaming_threshold_mb.saturating_mul(1024 * 1024)
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}
