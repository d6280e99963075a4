use crate::key::CanonicalKey;
use std::path::PathBuf;
use tokio::fs::File;

/// How a served file was located
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy { requested: String },
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy { .. } => "fuzzy",
        }
    }
}

/// A located, opened file ready to be delivered
#[derive(Debug)]
pub struct ResolvedAsset {
    pub file: File,
    pub size: u64,
    pub physical_path: PathBuf,
    pub file_name: String,
    pub content_type: &'static str,
    pub match_kind: MatchKind,
}

/// Outcome of a single lookup strategy
#[derive(Debug)]
pub enum Lookup {
    Found(ResolvedAsset),
    Miss,
}

/// Outcome of the whole resolution chain
#[derive(Debug)]
pub enum Resolution {
    Found(ResolvedAsset),
    NotFound(CanonicalKey),
}
