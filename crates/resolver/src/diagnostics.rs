use crate::key::CanonicalKey;
use lms_metadata::MetadataStore;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReference {
    pub document_id: String,
    pub trainee_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseReference {
    pub course_id: String,
    pub name: String,
    pub category: Option<String>,
}

/// Where a missing file is still referenced from
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub key: CanonicalKey,
    pub documents: Vec<DocumentReference>,
    pub courses: Vec<CourseReference>,
    /// Store failures, kept only so they can be logged
    pub lookup_errors: Vec<String>,
}

impl DiagnosticReport {
    pub fn is_dangling(&self) -> bool {
        !self.documents.is_empty() || !self.courses.is_empty()
    }

    pub fn log(&self) {
        for error in &self.lookup_errors {
            tracing::debug!(key = %self.key, error = %error, "diagnostics: metadata lookup failed");
        }

        if !self.is_dangling() {
            tracing::debug!(key = %self.key, "diagnostics: missing file is not referenced by any record");
            return;
        }

        for doc in &self.documents {
            tracing::warn!(
                key = %self.key,
                document_id = %doc.document_id,
                trainee_id = doc.trainee_id.as_deref().unwrap_or("-"),
                title = doc.title.as_deref().unwrap_or("-"),
                "diagnostics: trainee document references a file missing on disk"
            );
        }

        for course in &self.courses {
            tracing::warn!(
                key = %self.key,
                course_id = %course.course_id,
                course_name = %course.name,
                category = course.category.as_deref().unwrap_or("-"),
                "diagnostics: course material references a file missing on disk"
            );
        }
    }
}

/// Explains 404s by looking up which records still point at the missing key.
/// Never fails and never influences the response.
#[derive(Clone)]
pub struct DiagnosticCrossReferencer {
    store: Arc<dyn MetadataStore>,
}

impl DiagnosticCrossReferencer {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub async fn cross_reference(&self, key: &CanonicalKey) -> DiagnosticReport {
        let (documents, courses) = tokio::join!(
            self.store.find_documents_by_file_url(key.as_str()),
            self.store.find_courses_with_material(key.as_str()),
        );

        let mut report = DiagnosticReport {
            key: key.clone(),
            documents: Vec::new(),
            courses: Vec::new(),
            lookup_errors: Vec::new(),
        };

        match documents {
            Ok(documents) => {
                report.documents = documents
                    .into_iter()
                    .map(|doc| DocumentReference {
                        document_id: doc.id,
                        trainee_id: doc.trainee_id,
                        title: doc.title,
                    })
                    .collect();
            }
            Err(e) => report.lookup_errors.push(format!("documents: {}", e)),
        }

        match courses {
            Ok(courses) => {
                report.courses = courses
                    .into_iter()
                    .map(|course| CourseReference {
                        course_id: course.id,
                        name: course.name,
                        category: course.category,
                    })
                    .collect();
            }
            Err(e) => report.lookup_errors.push(format!("courses: {}", e)),
        }

        report
    }

    /// Runs the cross-reference and logs it
    pub async fn diagnose(&self, key: &CanonicalKey) {
        self.cross_reference(key).await.log();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_metadata::{DisabledStore, MetadataError};
    use lms_models::{Course, TraineeDocument};

    struct FixedStore;

    #[async_trait::async_trait]
    impl MetadataStore for FixedStore {
        async fn find_documents_by_file_url(&self, key: &str) -> Result<Vec<TraineeDocument>, MetadataError> {
            Ok(vec![TraineeDocument {
                id: "doc-9".to_string(),
                trainee_id: Some("trainee-3".to_string()),
                title: None,
                file_url: key.to_string(),
                uploaded_at: None,
            }])
        }

        async fn find_courses_with_material(&self, _key: &str) -> Result<Vec<Course>, MetadataError> {
            Err(MetadataError::Disabled)
        }

        fn backend_name(&self) -> &'static str {
            "fixed"
        }
    }

    fn key(parts: &[&str]) -> CanonicalKey {
        let parts: Vec<String> = parts.iter().map(|s| s.to_string()).collect();
        CanonicalKey::from_components(&parts).unwrap()
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_successful_lookup() {
        let referencer = DiagnosticCrossReferencer::new(Arc::new(FixedStore));
        let report = referencer.cross_reference(&key(&["documents", "cv.pdf"])).await;

        assert!(report.is_dangling());
        assert_eq!(report.documents[0].document_id, "doc-9");
        assert!(report.courses.is_empty());
        assert_eq!(report.lookup_errors.len(), 1);
    }

    #[tokio::test]
    async fn test_disabled_store_yields_empty_report() {
        let referencer = DiagnosticCrossReferencer::new(Arc::new(DisabledStore));
        let report = referencer.cross_reference(&key(&["ghost", "missing.docx"])).await;

        assert!(!report.is_dangling());
        assert_eq!(report.lookup_errors.len(), 2);
        report.log();
    }
}
