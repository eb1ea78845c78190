pub mod types;
pub mod parser;

// Re-export the most common items for convenience
pub use types::{FrontMatter, FrontMatterError};
pub use parser::parse;
