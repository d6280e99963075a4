use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file uploaded by (or for) a trainee, as exported from the relational store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraineeDocument {
    pub id: String,
    #[serde(default)]
    pub trainee_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Canonical `/uploads/...` reference of the stored file
    pub file_url: String,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Canonical `/uploads/...` references of the course materials
    #[serde(default)]
    pub materials: Vec<String>,
}

impl Course {
    pub fn references(&self, key: &str) -> bool {
        self.materials.iter().any(|m| m == key)
    }
}

/// Point-in-time export of the metadata the asset server cross-references
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSnapshot {
    #[serde(default, alias = "trainee_documents")]
    pub trainee_documents: Vec<TraineeDocument>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl MetadataSnapshot {
    pub fn documents_with_file_url(&self, key: &str) -> Vec<TraineeDocument> {
        self.trainee_documents
            .iter()
            .filter(|doc| doc.file_url == key)
            .cloned()
            .collect()
    }

    pub fn courses_with_material(&self, key: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| course.references(key))
            .cloned()
            .collect()
    }
}
