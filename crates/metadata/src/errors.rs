use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("I/O error reading '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed metadata snapshot '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Metadata store is disabled")]
    Disabled,
}
