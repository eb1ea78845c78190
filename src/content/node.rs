use crate::markdown::Document;

/// Handle to a [`ContentNode`] inside a [`ContentTree`](crate::content::ContentTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Whether a node is an ordinary page or a section index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Page,
    Section,
}

/// One page or section index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    pub title: String,
    pub date: String,
    /// Markdown HTML after parsing; the full page once templated
    pub rendered_body: String,
    /// Relative to the output directory, always `/`-separated
    pub output_path: String,
    pub url: String,
    pub kind: NodeKind,
    pub section_path: Option<String>,
    pub source_filename: String,
    pub draft: bool,
    /// Set only while the node is being rendered
    pub attached_listing: Option<Vec<NodeId>>,
}

impl ContentNode {
    /// An ordinary page living in `section_path`
    pub fn page(doc: Document, section_path: &str, filename: &str) -> Self {
        let slug = slug(filename);
        Self::from_document(
            doc,
            NodeKind::Page,
            Some(section_path.to_string()),
            filename,
            page_url(section_path, slug),
            page_output_path(section_path, slug),
        )
    }

    /// The index page of the section at `section_path`
    pub fn section_index(doc: Document, section_path: &str, filename: &str) -> Self {
        Self::from_document(
            doc,
            NodeKind::Section,
            Some(section_path.to_string()),
            filename,
            section_url(section_path),
            section_output_path(section_path),
        )
    }

    /// The site homepage. Its location does not depend on the filename.
    pub fn homepage(doc: Document, filename: &str) -> Self {
        Self::from_document(
            doc,
            NodeKind::Page,
            None,
            filename,
            "/".to_string(),
            "index.html".to_string(),
        )
    }

    fn from_document(
        doc: Document,
        kind: NodeKind,
        section_path: Option<String>,
        filename: &str,
        url: String,
        output_path: String,
    ) -> Self {
        ContentNode {
            title: doc.title,
            date: doc.date,
            rendered_body: doc.html,
            output_path,
            url,
            kind,
            section_path,
            source_filename: filename.to_string(),
            draft: doc.draft,
            attached_listing: None,
        }
    }
}

/// Filename minus a trailing `.md`; applying it twice changes nothing
pub fn slug(filename: &str) -> &str {
    filename.strip_suffix(".md").unwrap_or(filename)
}

fn section_prefix(section_path: &str) -> String {
    if section_path.is_empty() {
        String::new()
    } else {
        format!("{}/", section_path)
    }
}

pub fn page_url(section_path: &str, slug: &str) -> String {
    format!("/{}{}/", section_prefix(section_path), slug)
}

pub fn page_output_path(section_path: &str, slug: &str) -> String {
    format!("{}{}/index.html", section_prefix(section_path), slug)
}

pub fn section_url(section_path: &str) -> String {
    if section_path.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", section_path)
    }
}

pub fn section_output_path(section_path: &str) -> String {
    format!("{}index.html", section_prefix(section_path))
}
