//! Sitemap projection.
//!
//! Turns the content tree into a flat list of absolute URLs for
//! `sitemap.xml`, newest first, drafts left out.

mod xml;

use std::fmt;

use crate::content::{flatten, ContentTree, NodeKind};

pub use xml::{render_xml, write_sitemap, SITEMAP_FILE};

/// How often a crawler should expect an entry to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        })
    }
}

/// One `<url>` element
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub absolute_url: String,
    /// Omitted when the node has no date
    pub lastmod: Option<String>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Project every published node of `tree` onto a sitemap entry.
///
/// `hostname` is joined to each node URL with any trailing `/` removed.
pub fn project(tree: &ContentTree, hostname: &str) -> Vec<SitemapEntry> {
    let host = hostname.trim_end_matches('/');
    let homepage = tree.homepage();
    let shadowed = tree.shadowed_root_index();

    flatten(tree)
        .into_iter()
        .filter(|id| Some(*id) != shadowed)
        .filter_map(|id| {
            let node = tree.node(id);
            if node.draft {
                return None;
            }

            let (priority, changefreq) = if Some(id) == homepage {
                (1.0, ChangeFreq::Weekly)
            } else if node.kind == NodeKind::Section {
                (0.8, ChangeFreq::Weekly)
            } else {
                (0.6, ChangeFreq::Monthly)
            };

            Some(SitemapEntry {
                absolute_url: format!("{}{}", host, node.url),
                lastmod: Some(node.date.clone()).filter(|d| !d.is_empty()),
                changefreq,
                priority,
            })
        })
        .collect()
}
