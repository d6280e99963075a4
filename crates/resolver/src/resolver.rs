use crate::direct::resolve_direct;
use crate::errors::ResolveError;
use crate::fuzzy::resolve_fuzzy;
use crate::models::{Lookup, Resolution};
use crate::normalizer::normalize;
use crate::sandbox::SandboxRoot;

/// Runs a request path through normalization, the exact lookup and, when
/// enabled, the fuzzy fallback.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    sandbox: SandboxRoot,
    fuzzy_fallback: bool,
}

impl AssetResolver {
    pub fn new(sandbox: SandboxRoot, fuzzy_fallback: bool) -> Self {
        Self {
            sandbox,
            fuzzy_fallback,
        }
    }

    pub fn sandbox(&self) -> &SandboxRoot {
        &self.sandbox
    }

    pub fn fuzzy_fallback(&self) -> bool {
        self.fuzzy_fallback
    }

    pub async fn resolve(&self, segments: &[String]) -> Result<Resolution, ResolveError> {
        let request = normalize(segments, &self.sandbox)?;
        tracing::debug!("resolve: key = '{}'", request.key());

        if let Lookup::Found(asset) = resolve_direct(&request).await? {
            return Ok(Resolution::Found(asset));
        }

        if self.fuzzy_fallback {
            if let Lookup::Found(asset) = resolve_fuzzy(&request, &self.sandbox).await? {
                return Ok(Resolution::Found(asset));
            }
        }

        Ok(Resolution::NotFound(request.into_key()))
    }
}
