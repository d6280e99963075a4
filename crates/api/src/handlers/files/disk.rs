use crate::errors::ApiError;
use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use lms_resolver::ResolvedAsset;
use tokio::io::AsyncReadExt;
use tokio_util::io::ReaderStream;

pub const ASSET_MATCH_HEADER: HeaderName = HeaderName::from_static("x-asset-match");

/// Sends a resolved asset, streaming it when it is larger than the threshold
pub async fn deliver(asset: ResolvedAsset, streaming_threshold_bytes: u64) -> Result<Response, ApiError> {
    if asset.size > streaming_threshold_bytes {
        stream_large_file(asset)
    } else {
        load_small_file(asset).await
    }
}

fn asset_headers(asset: &ResolvedAsset, content_length: u64) -> [(HeaderName, HeaderValue); 4] {
    [
        (header::CONTENT_TYPE, HeaderValue::from_static(asset.content_type)),
        (header::CONTENT_DISPOSITION, HeaderValue::from_static("inline")),
        (header::CONTENT_LENGTH, HeaderValue::from(content_length)),
        (ASSET_MATCH_HEADER, HeaderValue::from_static(asset.match_kind.as_str())),
    ]
}

/// Streams a large file
fn stream_large_file(asset: ResolvedAsset) -> Result<Response, ApiError> {
    tracing::debug!(
        "serve_upload: streaming large file ({:.2} MB)",
        asset.size as f64 / 1024.0 / 1024.0
    );

    let headers = asset_headers(&asset, asset.size);
    let body = Body::from_stream(ReaderStream::new(asset.file));

    Ok((StatusCode::OK, headers, body).into_response())
}

/// Reads a small file into memory
async fn load_small_file(mut asset: ResolvedAsset) -> Result<Response, ApiError> {
    let mut content = Vec::with_capacity(asset.size as usize);
    asset.file.read_to_end(&mut content).await.map_err(|e| {
        tracing::error!(
            "serve_upload: Failed to read file '{}': {}",
            asset.physical_path.display(),
            e
        );
        ApiError::InternalError(e.kind().to_string())
    })?;

    let headers = asset_headers(&asset, content.len() as u64);
    Ok((StatusCode::OK, headers, content).into_response())
}
