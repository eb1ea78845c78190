use std::fmt;

use crate::content::{ContentNode, NodeKind};

/// Which of the three templates renders a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRole {
    /// Homepage, and the fallback for the other two
    Base,
    /// Section indexes
    List,
    /// Ordinary pages
    Post,
}

impl TemplateRole {
    /// Pick the role for a node; the homepage always uses `Base`
    pub fn for_node(node: &ContentNode, is_homepage: bool) -> Self {
        if is_homepage {
            return TemplateRole::Base;
        }
        match node.kind {
            NodeKind::Section => TemplateRole::List,
            NodeKind::Page => TemplateRole::Post,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateRole::Base => "base",
            TemplateRole::List => "list",
            TemplateRole::Post => "post",
        }
    }

    /// File looked up in the templates directory
    pub fn file_name(self) -> String {
        format!("{}.html", self.name())
    }
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
