use crate::direct::open_asset;
use crate::errors::ResolveError;
use crate::models::{Lookup, MatchKind};
use crate::normalizer::NormalizedRequest;
use crate::sandbox::SandboxRoot;
use lms_filesystem::FileSystem;
use lms_utils::{decode_component, sanitize_filename, strip_timestamp_prefix};

/// Looks for a file in the requested folder whose name is equivalent to the
/// requested one once upload timestamps, casing and punctuation are ignored.
pub async fn resolve_fuzzy(request: &NormalizedRequest, sandbox: &SandboxRoot) -> Result<Lookup, ResolveError> {
    let folder = sandbox.join(request.folder());

    let names = match FileSystem::list_files_sorted(&folder).await {
        Ok(Some(names)) => names,
        Ok(None) => {
            tracing::debug!("fuzzy: folder '{}' does not exist", folder.display());
            return Ok(Lookup::Miss);
        }
        Err(e) => return Err(ResolveError::internal(&folder, e)),
    };

    let requested = request.file_name();
    let Some(candidate) = pick_candidate(&names, requested) else {
        return Ok(Lookup::Miss);
    };

    tracing::info!(
        "fuzzy: '{}' matched '{}' in '{}'",
        requested,
        candidate,
        lms_utils::normalize_path(&folder)
    );

    open_asset(
        &folder.join(candidate),
        MatchKind::Fuzzy {
            requested: requested.to_string(),
        },
    )
    .await
}

/// Chooses the file to serve for `requested` among `names`.
///
/// An exact name wins. Otherwise the first name (in the given order) whose
/// sanitized form, after dropping a `<digits>_` prefix, contains or is
/// contained in the sanitized, percent-decoded request. Names that sanitize
/// to nothing never match.
pub fn pick_candidate<'a>(names: &'a [String], requested: &str) -> Option<&'a str> {
    if let Some(exact) = names.iter().find(|name| name.as_str() == requested) {
        return Some(exact.as_str());
    }

    let wanted = sanitize_filename(&decode_component(requested));
    if wanted.is_empty() {
        return None;
    }

    names
        .iter()
        .find(|name| {
            let candidate = sanitize_filename(strip_timestamp_prefix(name));
            !candidate.is_empty() && (candidate.contains(&wanted) || wanted.contains(&candidate))
        })
        .map(String::as_str)
}
