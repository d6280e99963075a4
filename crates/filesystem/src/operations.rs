use super::models::{FileSystem, OpenedFile};
use anyhow::Result;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;

impl FileSystem {
    /// Makes sure `path` exists as a directory, returning whether it had to be created
    pub async fn ensure_directory(path: &Path, description: &str) -> Result<bool> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
            tracing::debug!("    Created: {} ({})", path.display(), description);
            Ok(true)
        } else {
            tracing::debug!("    Exists:  {} ({})", path.display(), description);
            Ok(false)
        }
    }

    pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }

    /// Opens a regular file for reading.
    ///
    /// Returns `Ok(None)` when nothing readable lives at `path`: the file is
    /// absent, a parent component is not a directory, the name is too long to
    /// exist, `path` is itself a directory, or `path` is a symlink. Symlinks
    /// are refused so this agrees with `list_files_sorted`. Every other
    /// failure is passed through.
    pub async fn open_file(path: &Path) -> io::Result<Option<OpenedFile>> {
        match fs::symlink_metadata(path).await {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(None),
            Ok(_) => {}
            Err(e) if is_absent(&e) => return Ok(None),
            Err(e) => return Err(e),
        }

        let file = match fs::File::open(path).await {
            Ok(file) => file,
            Err(e) if is_absent(&e) => return Ok(None),
            Err(e) => return Err(e),
        };

        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Ok(None);
        }

        Ok(Some(OpenedFile { file, metadata }))
    }

    /// Lists the names of the regular files directly inside `dir`, sorted by name.
    ///
    /// Returns `Ok(None)` when the directory does not exist. Symlinks and
    /// entries whose names are not valid UTF-8 are skipped.
    pub async fn list_files_sorted(dir: &Path) -> io::Result<Option<Vec<String>>> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if is_absent(&e) => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        names.sort();
        Ok(Some(names))
    }
}

/// Errors meaning "nothing can live here" rather than a failing filesystem.
/// `InvalidFilename` covers `ENAMETOOLONG`.
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidFilename
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_file_distinguishes_missing_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let opened = FileSystem::open_file(&dir.path().join("notes.txt")).await.unwrap();
        assert_eq!(opened.unwrap().metadata.len(), 5);

        assert!(FileSystem::open_file(&dir.path().join("missing.txt")).await.unwrap().is_none());
        assert!(FileSystem::open_file(&dir.path().join("sub")).await.unwrap().is_none());
        assert!(FileSystem::open_file(&dir.path().join("notes.txt/child")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_files_sorted_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.pdf"), b"b").unwrap();
        std::fs::write(dir.path().join("a.pdf"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("c")).unwrap();

        let names = FileSystem::list_files_sorted(dir.path()).await.unwrap().unwrap();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);

        assert!(FileSystem::list_files_sorted(&dir.path().join("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overlong_names_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let long_name = format!("{}.pdf", "a".repeat(300));

        assert!(FileSystem::open_file(&dir.path().join(&long_name)).await.unwrap().is_none());
        assert!(FileSystem::list_files_sorted(&dir.path().join("b".repeat(300))).await.unwrap().is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinks_are_refused_by_open_and_listing() {
        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("secret.txt");
        std::fs::write(&target, b"outside").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("secret.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(FileSystem::open_file(&link).await.unwrap().is_none());
        assert!(FileSystem::list_files_sorted(dir.path()).await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_directory_reports_creation() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("public").join("uploads");

        assert!(FileSystem::ensure_directory(&target, "Uploads root").await.unwrap());
        assert!(!FileSystem::ensure_directory(&target, "Uploads root").await.unwrap());
    }
}
