use crate::errors::ResolveError;
use crate::key::CanonicalKey;
use crate::sandbox::SandboxRoot;
use lms_utils::{collapse_segments, normalize_separators};
use std::path::{Path, PathBuf};

/// A request path reduced to its canonical key and sandboxed location
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    key: CanonicalKey,
    components: Vec<String>,
    physical: PathBuf,
}

impl NormalizedRequest {
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    pub fn into_key(self) -> CanonicalKey {
        self.key
    }

    /// Path relative to the sandbox root, `uploads/` prefix removed
    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn physical_path(&self) -> &Path {
        &self.physical
    }

    /// Last component, i.e. the file name as requested
    pub fn file_name(&self) -> &str {
        self.components.last().map(String::as_str).unwrap_or_default()
    }

    /// Directory the requested file should live in
    pub fn folder(&self) -> &[String] {
        &self.components[..self.components.len().saturating_sub(1)]
    }
}

/// Turns raw URL segments into a canonical key and a physical path under `sandbox`.
///
/// Traversal is neutralized rather than rejected: `..` that would climb
/// above the root is dropped. Empty input, input that collapses to nothing,
/// and NUL bytes are `InvalidPath`.
pub fn normalize(segments: &[String], sandbox: &SandboxRoot) -> Result<NormalizedRequest, ResolveError> {
    if segments.is_empty() {
        return Err(ResolveError::invalid("Path is empty"));
    }

    if segments.iter().any(|s| s.contains('\0')) {
        return Err(ResolveError::invalid("Path contains null byte"));
    }

    let joined = normalize_separators(&segments.join("/"));
    let components = strip_uploads_prefix(collapse_segments(&joined));

    if components.is_empty() {
        return Err(ResolveError::invalid("Path does not name a file"));
    }

    let key = CanonicalKey::from_components(&components)?;
    let physical = sandbox.join(&components);

    if !sandbox.contains(&physical) {
        tracing::warn!(
            "normalize: '{}' escaped the uploads root, rejecting",
            physical.display()
        );
        return Err(ResolveError::invalid("Path escapes the uploads root"));
    }

    Ok(NormalizedRequest {
        key,
        components,
        physical,
    })
}

/// Drops one leading `uploads/` or `public/uploads/`
fn strip_uploads_prefix(mut components: Vec<String>) -> Vec<String> {
    let prefix_len = match components.as_slice() {
        [first, second, ..] if first == "public" && second == "uploads" => 2,
        [first, ..] if first == "uploads" => 1,
        _ => 0,
    };
    components.drain(..prefix_len);
    components
}
