use crate::MetadataError;
use lms_models::{Course, TraineeDocument};

/// Read-only view of the LMS records that reference uploaded files
#[async_trait::async_trait]
pub trait MetadataStore: Send + Sync {
    /// Documents whose stored file reference equals `key` exactly
    async fn find_documents_by_file_url(&self, key: &str) -> Result<Vec<TraineeDocument>, MetadataError>;

    /// Courses whose materials list contains `key`
    async fn find_courses_with_material(&self, key: &str) -> Result<Vec<Course>, MetadataError>;

    /// Short backend name for logs and the health endpoint
    fn backend_name(&self) -> &'static str;
}
