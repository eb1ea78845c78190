use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use once_cell::unsync::OnceCell;

use crate::content::ContentNode;
use crate::template::parser::{self, Placeholder, TemplateNode};
use crate::template::role::TemplateRole;
use crate::utils::error::{SiteError, SiteResult};

/// Loaded template source, parsed on first use
#[derive(Debug)]
pub struct Template {
    path: PathBuf,
    source: String,
    parsed: OnceCell<Vec<TemplateNode>>,
}

impl Template {
    pub fn new(path: PathBuf, source: String) -> Self {
        Template {
            path,
            source,
            parsed: OnceCell::new(),
        }
    }

    /// A template that did not come from disk
    pub fn inline(source: &str) -> Self {
        Template::new(PathBuf::from("<inline>"), source.to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn nodes(&self) -> SiteResult<&[TemplateNode]> {
        self.parsed
            .get_or_try_init(|| {
                parser::parse(&self.source).map_err(|message| SiteError::TemplateSyntax {
                    path: self.path.clone(),
                    message,
                })
            })
            .map(Vec::as_slice)
    }

    /// Render `node`, iterating `listing` for each `{{#each pages}}` block.
    /// No listing means every block renders empty.
    pub fn render(
        &self,
        node: &ContentNode,
        listing: Option<&[&ContentNode]>,
    ) -> SiteResult<String> {
        let mut out = String::with_capacity(self.source.len() + node.rendered_body.len());
        render_nodes(self.nodes()?, node, None, listing, &mut out);
        Ok(out)
    }
}

fn render_nodes(
    nodes: &[TemplateNode],
    node: &ContentNode,
    item: Option<&ContentNode>,
    listing: Option<&[&ContentNode]>,
    out: &mut String,
) {
    for template_node in nodes {
        match template_node {
            TemplateNode::Text(text) => out.push_str(text),
            TemplateNode::Placeholder(placeholder) => {
                out.push_str(resolve(placeholder, node, item))
            }
            TemplateNode::Each(body) => {
                for &entry in listing.unwrap_or_default() {
                    render_nodes(body, node, Some(entry), None, out);
                }
            }
        }
    }
}

fn resolve<'a>(
    placeholder: &Placeholder,
    node: &'a ContentNode,
    item: Option<&'a ContentNode>,
) -> &'a str {
    match placeholder {
        Placeholder::Title => node.title.as_str(),
        Placeholder::Content => node.rendered_body.as_str(),
        Placeholder::Date => node.date.as_str(),
        Placeholder::Url => node.url.as_str(),
        Placeholder::ItemTitle => item.map_or("", |i| i.title.as_str()),
        Placeholder::ItemUrl => item.map_or("", |i| i.url.as_str()),
        Placeholder::ItemDate => item.map_or("", |i| i.date.as_str()),
        Placeholder::Unknown(_) => "",
    }
}

/// Per-build template store. Each role is loaded at most once; a missing
/// `list` or `post` template falls back to `base`, which is mandatory.
#[derive(Debug)]
pub struct TemplateCache {
    dir: PathBuf,
    templates: HashMap<TemplateRole, Template>,
    fallbacks: HashSet<TemplateRole>,
}

impl TemplateCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TemplateCache {
            dir: dir.into(),
            templates: HashMap::new(),
            fallbacks: HashSet::new(),
        }
    }

    /// The template that renders `role`, loading it on first request
    pub fn get(&mut self, role: TemplateRole) -> SiteResult<&Template> {
        let resolved = self.resolve(role)?;
        self.templates.get(&resolved).ok_or_else(|| {
            SiteError::RequiredTemplateNotFound(self.dir.join(resolved.file_name()))
        })
    }

    fn resolve(&mut self, role: TemplateRole) -> SiteResult<TemplateRole> {
        if self.templates.contains_key(&role) {
            return Ok(role);
        }
        if self.fallbacks.contains(&role) {
            return Ok(TemplateRole::Base);
        }

        let path = self.dir.join(role.file_name());
        match fs::read_to_string(&path) {
            Ok(source) => {
                debug!("Loaded {} template from {}", role, path.display());
                self.templates.insert(role, Template::new(path, source));
                Ok(role)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if role == TemplateRole::Base {
                    return Err(SiteError::RequiredTemplateNotFound(path));
                }
                debug!("No {} template at {}, using base", role, path.display());
                self.resolve(TemplateRole::Base)?;
                self.fallbacks.insert(role);
                Ok(TemplateRole::Base)
            }
            Err(e) => Err(SiteError::io(&path, e)),
        }
    }

    /// Number of template files actually read
    pub fn loaded(&self) -> usize {
        self.templates.len()
    }
}
