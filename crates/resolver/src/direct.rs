use crate::content_type::content_type_for;
use crate::errors::ResolveError;
use crate::models::{Lookup, MatchKind, ResolvedAsset};
use crate::normalizer::NormalizedRequest;
use lms_filesystem::FileSystem;
use std::path::Path;

/// Opens the file at the exact normalized location
pub async fn resolve_direct(request: &NormalizedRequest) -> Result<Lookup, ResolveError> {
    open_asset(request.physical_path(), MatchKind::Exact).await
}

pub(crate) async fn open_asset(path: &Path, match_kind: MatchKind) -> Result<Lookup, ResolveError> {
    let opened = match FileSystem::open_file(path).await {
        Ok(Some(opened)) => opened,
        Ok(None) => return Ok(Lookup::Miss),
        Err(e) => return Err(ResolveError::internal(path, e)),
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Lookup::Found(ResolvedAsset {
        file: opened.file,
        size: opened.metadata.len(),
        physical_path: path.to_path_buf(),
        file_name,
        content_type: content_type_for(path),
        match_kind,
    }))
}
