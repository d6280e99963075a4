use std::path::Path;

/// Renders a filesystem path with forward slashes regardless of platform
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Converts Windows-style separators in a logical path to `/`
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Lexically collapses `.` and `..` components of a `/`-separated path.
///
/// `..` at the top level is dropped rather than rejected, so the result can
/// never climb above the point it is later joined onto. Empty components
/// (`a//b`, leading or trailing `/`) are skipped.
pub fn collapse_segments(path: &str) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other.to_string()),
        }
    }

    stack
}
