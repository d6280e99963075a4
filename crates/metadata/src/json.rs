use crate::backend::MetadataStore;
use crate::MetadataError;
use lms_models::{Course, MetadataSnapshot, TraineeDocument};
use std::path::PathBuf;

/// Metadata backed by a JSON export of the LMS database.
///
/// The file is re-read on every query, so lookups always see the latest export.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn load(&self) -> Result<MetadataSnapshot, MetadataError> {
        let display = self.path.display().to_string();

        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|source| MetadataError::IoError {
                path: display.clone(),
                source,
            })?;

        let snapshot = serde_json::from_slice(&content).map_err(|source| MetadataError::ParseError {
            path: display,
            source,
        })?;

        tracing::debug!("metadata: loaded snapshot '{}' ({} bytes)", self.path.display(), content.len());
        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl MetadataStore for JsonFileStore {
    async fn find_documents_by_file_url(&self, key: &str) -> Result<Vec<TraineeDocument>, MetadataError> {
        Ok(self.load().await?.documents_with_file_url(key))
    }

    async fn find_courses_with_material(&self, key: &str) -> Result<Vec<Course>, MetadataError> {
        Ok(self.load().await?.courses_with_material(key))
    }

    fn backend_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "traineeDocuments": [
            {"id": "doc-1", "traineeId": "t-7", "title": "CV", "fileUrl": "/uploads/documents/cv.pdf"},
            {"id": "doc-2", "fileUrl": "/uploads/documents/other.pdf"}
        ],
        "courses": [
            {"id": "c-1", "name": "Networking", "category": "IT", "materials": ["/uploads/ghost/missing.docx"]},
            {"id": "c-2", "name": "Design", "materials": []}
        ]
    }"#;

    #[tokio::test]
    async fn test_queries_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        std::fs::write(&path, SNAPSHOT).unwrap();
        let store = JsonFileStore::new(path);

        let docs = store.find_documents_by_file_url("/uploads/documents/cv.pdf").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].trainee_id.as_deref(), Some("t-7"));

        let courses = store.find_courses_with_material("/uploads/ghost/missing.docx").await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Networking");
    }

    #[tokio::test]
    async fn test_missing_or_malformed_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(matches!(
            missing.find_courses_with_material("/uploads/a/b").await,
            Err(MetadataError::IoError { .. })
        ));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let broken = JsonFileStore::new(path);
        assert!(matches!(
            broken.find_documents_by_file_url("/uploads/a/b").await,
            Err(MetadataError::ParseError { .. })
        ));
    }
}
