pub mod node;
pub mod tree;
pub mod listing;
pub mod builder;

pub use node::{ContentNode, NodeId, NodeKind, slug};
pub use tree::{ContentTree, Section, SectionId};
pub use listing::{flatten, section_listing, sort_by_date_desc};
pub use builder::{build, HOMEPAGE_FILE, SECTION_INDEX_FILE};
