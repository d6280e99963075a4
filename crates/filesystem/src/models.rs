use std::fs::Metadata;
use tokio::fs::File;

/// Stateless helpers around `tokio::fs`
pub struct FileSystem;

/// A regular file opened for reading, with the metadata taken from the handle
#[derive(Debug)]
pub struct OpenedFile {
    pub file: File,
    pub metadata: Metadata,
}
