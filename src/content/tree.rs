use std::collections::HashMap;

use crate::content::node::{ContentNode, NodeId};
use crate::utils::error::{SiteError, SiteResult};

/// Handle to a [`Section`] inside a [`ContentTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub(crate) usize);

/// A directory-derived grouping of pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    /// Normalized `/`-joined path, `""` for the root
    pub path: String,
    pub index_page: Option<NodeId>,
    /// Discovery order, not date order
    pub pages: Vec<NodeId>,
    pub children: Vec<SectionId>,
}

/// Owns every section and node of one build.
///
/// Sections and nodes are stored in flat arenas and addressed by index, so
/// the whole tree is released at once when it is dropped.
#[derive(Debug, Default)]
pub struct ContentTree {
    sections: Vec<Section>,
    nodes: Vec<ContentNode>,
    by_path: HashMap<String, SectionId>,
    homepage: Option<NodeId>,
}

impl ContentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the section at `path`, linking it under `parent`
    pub fn ensure_section(
        &mut self,
        path: &str,
        name: &str,
        parent: Option<SectionId>,
    ) -> SectionId {
        if let Some(id) = self.by_path.get(path) {
            return *id;
        }

        let id = SectionId(self.sections.len());
        self.sections.push(Section {
            name: name.to_string(),
            path: path.to_string(),
            index_page: None,
            pages: Vec::new(),
            children: Vec::new(),
        });
        self.by_path.insert(path.to_string(), id);

        if let Some(parent) = parent {
            self.sections[parent.0].children.push(id);
        }
        id
    }

    /// Attach the index page of a section. A section takes at most one;
    /// a second attempt fails and leaves the first in place.
    pub fn set_index_page(&mut self, section: SectionId, node: ContentNode) -> SiteResult<NodeId> {
        if self.sections[section.0].index_page.is_some() {
            return Err(SiteError::SectionIndexAlreadyExists {
                section: self.sections[section.0].path.clone(),
            });
        }

        let id = self.alloc(node);
        self.sections[section.0].index_page = Some(id);
        Ok(id)
    }

    /// Append an ordinary page to a section
    pub fn add_page(&mut self, section: SectionId, node: ContentNode) -> NodeId {
        let id = self.alloc(node);
        self.sections[section.0].pages.push(id);
        id
    }

    pub fn set_homepage(&mut self, node: ContentNode) -> NodeId {
        let id = self.alloc(node);
        self.homepage = Some(id);
        id
    }

    fn alloc(&mut self, node: ContentNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn homepage(&self) -> Option<NodeId> {
        self.homepage
    }

    pub fn root(&self) -> Option<SectionId> {
        self.section_by_path("")
    }

    pub fn section_by_path(&self, path: &str) -> Option<SectionId> {
        self.by_path.get(path).copied()
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }

    /// All sections in creation order (parents before children)
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &Section)> {
        self.sections.iter().enumerate().map(|(i, s)| (SectionId(i), s))
    }

    pub fn node(&self, id: NodeId) -> &ContentNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut ContentNode {
        &mut self.nodes[id.0]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Root section index that collides with the homepage's `index.html`
    pub fn shadowed_root_index(&self) -> Option<NodeId> {
        self.homepage?;
        self.root().and_then(|root| self.section(root).index_page)
    }

    pub fn attach_listing(&mut self, id: NodeId, listing: Vec<NodeId>) {
        self.nodes[id.0].attached_listing = Some(listing);
    }

    pub fn clear_listing(&mut self, id: NodeId) {
        self.nodes[id.0].attached_listing = None;
    }
}
