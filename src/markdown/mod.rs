pub mod engine;
pub mod latex;
pub mod document;

pub use engine::render_markdown;
pub use latex::rewrite_math;
pub use document::{Document, load_document};
