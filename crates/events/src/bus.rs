use super::models::{AppEvent, EventBus};
use std::sync::Arc;
use colored::Colorize;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "LMS Uploads - Asset Server".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr, sandbox_root } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server ".white(), addr.cyan());
                println!("  {} {}", "Serving".white(), sandbox_root.blue());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                println!("\n{}", "Server shutting down".red());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { fuzzy_fallback } => {
                if fuzzy_fallback {
                    println!("  {} Config loaded (fuzzy fallback on)", "✓".green());
                } else {
                    println!("  {} Config loaded (exact matches only)", "✓".green());
                }
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }

            // Sandbox
            AppEvent::SandboxCreated { path } => {
                println!("  {} Created uploads root {}", "+".green(), path.cyan());
            }
            AppEvent::SandboxReady { path } => {
                println!("  {} Uploads root {}", "✓".green(), path.cyan());
            }
            AppEvent::SandboxMissing { path } => {
                println!("  {} Uploads root does not exist: {}", "⚠".yellow(), path.cyan());
                tracing::warn!("Uploads root '{}' is missing, every request will 404", path);
            }

            // Metadata store
            AppEvent::MetadataStoreReady { backend, location } => {
                println!("  {} Metadata {} ({})", "✓".green(), backend.cyan(), location.dimmed());
            }
            AppEvent::MetadataStoreDisabled => {
                println!("  {} Metadata cross-reference disabled", "-".dimmed());
            }
        }
    }
}
