use lms_utils::decode_component;

const ROUTE_PREFIX: &str = "uploads";

/// Splits the URI path below `/uploads` into percent-decoded segments.
///
/// Empty segments are dropped, so `/uploads` and `/uploads/` both yield an
/// empty list.
pub fn parse_request_path(uri_path: &str) -> Vec<String> {
    let trimmed = uri_path.trim_start_matches('/');
    let below_prefix = match trimmed.strip_prefix(ROUTE_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => trimmed,
    };

    let segments: Vec<String> = below_prefix
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(decode_component)
        .collect();

    tracing::debug!("serve_upload: segments = {:?}", segments);
    segments
}
