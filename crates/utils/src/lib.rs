pub mod path;
pub mod text;

pub use path::*;
pub use text::*;
