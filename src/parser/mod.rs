pub mod document;
pub mod record;

pub use document::*;
pub use record::*;
