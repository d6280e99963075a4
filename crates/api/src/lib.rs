pub mod handlers;
pub mod models;
pub mod errors;

pub use handlers::*;
pub use models::*;
pub use errors::ApiError;
