mod content_type;
mod diagnostics;
mod direct;
mod errors;
mod fuzzy;
mod key;
mod models;
mod normalizer;
mod resolver;
mod sandbox;

pub use content_type::{content_type_for, DEFAULT_CONTENT_TYPE};
pub use diagnostics::{CourseReference, DiagnosticCrossReferencer, DiagnosticReport, DocumentReference};
pub use direct::resolve_direct;
pub use errors::ResolveError;
pub use fuzzy::{pick_candidate, resolve_fuzzy};
pub use key::CanonicalKey;
pub use models::{Lookup, MatchKind, Resolution, ResolvedAsset};
pub use resolver::AssetResolver;
pub use normalizer::{normalize, NormalizedRequest};
pub use sandbox::SandboxRoot;
