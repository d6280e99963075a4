use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<lms_events::EventBus>>,
) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>().map_err(ConfigError::from)?;
    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;
        tracing::info!(
            "Migrated {}: added {}",
            path.as_ref().display(),
            added_fields.join(", ")
        );

        if let Some(event_bus) = events {
            event_bus.emit(lms_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

/// Adds every missing section and field, returning what was added
fn migrate_document(doc: &mut DocumentMut) -> anyhow::Result<Vec<String>> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_uploads_section(doc, &mut added_fields)?;
    migrate_metadata_section(doc, &mut added_fields)?;

    Ok(added_fields)
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let server = ensure_table(doc, "server", added_fields)?;

    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(8080), added_fields);
    ensure_field(server, "tcp_nodelay", Value::from(true), added_fields);
    ensure_field(server, "timeout_secs", Value::from(60), added_fields);
    ensure_field(
        server,
        "max_concurrent_requests",
        Value::from(1000),
        added_fields,
    );
    ensure_field(
        server,
        "streaming_threshold_mb",
        Value::from(16),
        added_fields,
    );
    ensure_field(
        server,
        "enable_compression",
        Value::from(true),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_uploads_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let uploads = ensure_table(doc, "uploads", added_fields)?;

    ensure_field(uploads, "root", Value::from("public/uploads"), added_fields);
    ensure_field(uploads, "fuzzy_fallback", Value::from(true), added_fields);
    ensure_field(uploads, "create_root", Value::from(true), added_fields);

    Ok(())
}

fn migrate_metadata_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let metadata = ensure_table(doc, "metadata", added_fields)?;

    ensure_field(metadata, "enabled", Value::from(true), added_fields);
    ensure_field(
        metadata,
        "snapshot_path",
        Value::from("data/metadata.json"),
        added_fields,
    );

    Ok(())
}

fn ensure_table<'a>(
    doc: &'a mut DocumentMut,
    name: &str,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<&'a mut Table> {
    if !doc.contains_key(name) {
        doc[name] = Item::Table(Table::new());
        added_fields.push(name.to_string());
    }

    doc[name]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError(format!("[{}] is not a table", name)).into())
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}
