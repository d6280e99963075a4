mod disk;
mod handler;
mod parser;

pub use handler::serve_upload;
