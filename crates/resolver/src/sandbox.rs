use std::path::{Path, PathBuf};

/// The only directory tree assets may be read from
#[derive(Debug, Clone)]
pub struct SandboxRoot {
    root: PathBuf,
}

impl SandboxRoot {
    /// `root` is expected to be absolute; the bootstrap resolves it against
    /// the working directory before constructing the sandbox.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, components: &[String]) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(components);
        path
    }

    /// Component-wise containment, independent of how `path` was built
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.root) && path != self.root
    }
}
