mod backend;
mod disabled;
mod errors;
mod json;

pub use backend::MetadataStore;
pub use disabled::DisabledStore;
pub use errors::*;
pub use json::JsonFileStore;
