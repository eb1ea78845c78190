use crate::content::node::NodeId;
use crate::content::tree::{ContentTree, SectionId};

/// Sort node ids by their `date` string, newest first.
///
/// Dates are compared byte-wise, never parsed, so ISO-8601 strings order
/// correctly. The sort is stable: equal dates keep their incoming order.
pub fn sort_by_date_desc(tree: &ContentTree, ids: &mut [NodeId]) {
    ids.sort_by(|a, b| tree.node(*b).date.as_bytes().cmp(tree.node(*a).date.as_bytes()));
}

/// A section's own pages, newest first
pub fn section_listing(tree: &ContentTree, section: SectionId) -> Vec<NodeId> {
    let mut ids = tree.section(section).pages.clone();
    sort_by_date_desc(tree, &mut ids);
    ids
}

/// Every node of the build (homepage, section indexes, pages), newest first
pub fn flatten(tree: &ContentTree) -> Vec<NodeId> {
    let mut ids = Vec::with_capacity(tree.node_count());

    if let Some(home) = tree.homepage() {
        ids.push(home);
    }
    for (_, section) in tree.sections() {
        ids.extend(section.index_page);
        ids.extend(section.pages.iter().copied());
    }

    sort_by_date_desc(tree, &mut ids);
    ids
}
