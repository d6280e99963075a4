use super::{disk, parser};
use crate::errors::ApiError;
use crate::handlers::models::AppState;
use axum::{
    extract::State,
    http::Uri,
    response::Response,
};
use lms_resolver::{MatchKind, Resolution};

pub async fn serve_upload(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, ApiError> {
    tracing::debug!("serve_upload: requested path = '{}'", uri.path());

    let segments = parser::parse_request_path(uri.path());

    match state.resolver.resolve(&segments).await? {
        Resolution::Found(asset) => {
            if let MatchKind::Fuzzy { requested } = &asset.match_kind {
                tracing::debug!(
                    "serve_upload: '{}' served by fuzzy match '{}'",
                    requested,
                    asset.file_name
                );
            }
            disk::deliver(asset, state.streaming_threshold_bytes).await
        }
        Resolution::NotFound(key) => {
            tracing::debug!("serve_upload: '{}' not found, cross-referencing metadata", key);
            state.diagnostics.diagnose(&key).await;
            Err(ApiError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::{routes, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use lms_metadata::{DisabledStore, JsonFileStore, MetadataError, MetadataStore};
    use lms_models::{Course, TraineeDocument};
    use lms_resolver::{AssetResolver, DiagnosticCrossReferencer, SandboxRoot};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    const SYLLABUS: &[u8] = b"%PDF-1.4 syllabus bytes";

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path().join("public").join("uploads");
            for folder in ["courses", "library", "misc"] {
                std::fs::create_dir_all(root.join(folder)).unwrap();
            }
            std::fs::write(root.join("courses/167234_syllabus.pdf"), SYLLABUS).unwrap();
            std::fs::write(root.join("library/1699999999_report.pdf"), b"report").unwrap();
            std::fs::write(root.join("misc/data.xyz"), b"\x00\x01\x02").unwrap();
            std::fs::write(dir.path().join("secret.txt"), b"top secret").unwrap();
            Self { dir }
        }

        fn root(&self) -> std::path::PathBuf {
            self.dir.path().join("public").join("uploads")
        }

        fn app_with(&self, store: Arc<dyn MetadataStore>, streaming_threshold_bytes: u64) -> Router {
            let resolver = Arc::new(AssetResolver::new(SandboxRoot::new(self.root()), true));
            let state = AppState::new(
                resolver,
                DiagnosticCrossReferencer::new(store),
                streaming_threshold_bytes,
            );
            routes(state)
        }

        fn app(&self) -> Router {
            self.app_with(Arc::new(DisabledStore), 1024 * 1024)
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    /// Counts lookups so tests can see the cross-reference ran
    struct CountingStore {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl MetadataStore for CountingStore {
        async fn find_documents_by_file_url(&self, _key: &str) -> Result<Vec<TraineeDocument>, MetadataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn find_courses_with_material(&self, _key: &str) -> Result<Vec<Course>, MetadataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(MetadataError::Disabled)
        }

        fn backend_name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_exact_match_serves_bytes_inline() {
        let fixture = Fixture::new();
        let (status, headers, body) = get(fixture.app(), "/uploads/courses/167234_syllabus.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(headers[header::CONTENT_DISPOSITION], "inline");
        assert_eq!(headers["x-asset-match"], "exact");
        assert_eq!(body, SYLLABUS);
    }

    #[tokio::test]
    async fn test_fuzzy_match_serves_timestamped_file() {
        let fixture = Fixture::new();
        let (status, headers, body) = get(fixture.app(), "/uploads/library/Report.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-asset-match"], "fuzzy");
        assert_eq!(body, b"report");
    }

    #[tokio::test]
    async fn test_unknown_extension_is_octet_stream() {
        let fixture = Fixture::new();
        let (status, headers, _) = get(fixture.app(), "/uploads/misc/data.xyz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/octet-stream");
    }

    #[tokio::test]
    async fn test_traversal_is_not_found() {
        let fixture = Fixture::new();

        for uri in [
            "/uploads/../../etc/passwd",
            "/uploads/%2e%2e/%2e%2e/etc/passwd",
            "/uploads/%2e%2e/%2e%2e/secret.txt",
            "/uploads/..%5C..%5Csecret.txt",
        ] {
            let (status, _, body) = get(fixture.app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_ne!(body, b"top secret");
        }
    }

    #[tokio::test]
    async fn test_empty_path_is_bad_request() {
        let fixture = Fixture::new();

        for uri in ["/uploads", "/uploads/", "/uploads/%2e%2e"] {
            let (status, _, _) = get(fixture.app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_missing_file_runs_diagnostics_and_returns_404() {
        let fixture = Fixture::new();
        let store = Arc::new(CountingStore {
            calls: AtomicUsize::new(0),
        });
        let app = fixture.app_with(store.clone(), 1024 * 1024);

        let (status, _, body) = get(app, "/uploads/ghost/missing.docx").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"File not found");
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_overlong_names_are_404() {
        let fixture = Fixture::new();

        let uri = format!("/uploads/library/{}.pdf", "a".repeat(300));
        let (status, _, _) = get(fixture.app(), &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let uri = format!("/uploads/{}/x.pdf", "b".repeat(300));
        let (status, _, _) = get(fixture.app(), &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dangling_course_material_is_still_404() {
        let fixture = Fixture::new();
        let snapshot = fixture.dir.path().join("metadata.json");
        std::fs::write(
            &snapshot,
            r#"{"courses":[{"id":"c-1","name":"Networking","category":"IT","materials":["/uploads/ghost/missing.docx"]}]}"#,
        )
        .unwrap();
        let app = fixture.app_with(Arc::new(JsonFileStore::new(snapshot)), 1024 * 1024);

        let (status, _, _) = get(app, "/uploads/ghost/missing.docx").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreadable_snapshot_does_not_mask_404() {
        let fixture = Fixture::new();
        let app = fixture.app_with(
            Arc::new(JsonFileStore::new(Path::new("/nonexistent/metadata.json").to_path_buf())),
            1024 * 1024,
        );

        let (status, _, _) = get(app, "/uploads/ghost/missing.docx").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_large_files_are_streamed_intact() {
        let fixture = Fixture::new();
        let (status, headers, body) =
            get(fixture.app_with(Arc::new(DisabledStore), 4), "/uploads/courses/167234_syllabus.pdf").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_LENGTH], SYLLABUS.len().to_string().as_str());
        assert_eq!(body, SYLLABUS);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let fixture = Fixture::new();
        let first = get(fixture.app(), "/uploads/library/report.pdf").await;
        let second = get(fixture.app(), "/uploads/library/report.pdf").await;

        assert_eq!(first.0, second.0);
        assert_eq!(first.2, second.2);
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let fixture = Fixture::new();
        let (status, _, body) = get(fixture.app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["fuzzy_fallback"], true);
        assert_eq!(json["metadata"], "disabled");
    }
}
