use crate::errors::ResolveError;
use std::fmt;

/// Logical reference to an uploaded file, as persisted by the LMS
/// (`TraineeDocument.fileUrl`, `Course.materials`).
///
/// Always `/uploads/` followed by one or more plain components; never
/// contains `.` or `..` components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub const PREFIX: &'static str = "/uploads/";

    /// Builds a key from already-collapsed path components
    pub fn from_components(components: &[String]) -> Result<Self, ResolveError> {
        if components.is_empty() {
            return Err(ResolveError::invalid("Path is empty"));
        }

        for component in components {
            if component.is_empty()
                || component == "."
                || component == ".."
                || component.contains(['/', '\\'])
            {
                return Err(ResolveError::invalid(format!(
                    "Path component '{}' is not allowed",
                    component
                )));
            }
        }

        Ok(Self(format!("{}{}", Self::PREFIX, components.join("/"))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builds_uploads_key() {
        let key = CanonicalKey::from_components(&parts(&["courses", "167234_syllabus.pdf"])).unwrap();
        assert_eq!(key.as_str(), "/uploads/courses/167234_syllabus.pdf");
    }

    #[test]
    fn test_rejects_traversal_and_empty_components() {
        assert!(CanonicalKey::from_components(&[]).is_err());
        assert!(CanonicalKey::from_components(&parts(&["..", "etc"])).is_err());
        assert!(CanonicalKey::from_components(&parts(&["a", ""])).is_err());
        assert!(CanonicalKey::from_components(&parts(&["a/b"])).is_err());
    }
}
