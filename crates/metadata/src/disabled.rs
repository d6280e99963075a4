use crate::backend::MetadataStore;
use crate::MetadataError;
use lms_models::{Course, TraineeDocument};

/// Stand-in used when cross-referencing is switched off
pub struct DisabledStore;

#[async_trait::async_trait]
impl MetadataStore for DisabledStore {
    async fn find_documents_by_file_url(&self, _key: &str) -> Result<Vec<TraineeDocument>, MetadataError> {
        Err(MetadataError::Disabled)
    }

    async fn find_courses_with_material(&self, _key: &str) -> Result<Vec<Course>, MetadataError> {
        Err(MetadataError::Disabled)
    }

    fn backend_name(&self) -> &'static str {
        "disabled"
    }
}
