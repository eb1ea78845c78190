use std::fmt;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::ContentTree;
use crate::template::TemplateCache;

/// Everything one build owns. Dropping it releases the whole content tree
/// and every loaded template; nothing carries over to the next build.
#[derive(Debug)]
pub struct BuildContext {
    pub config: SiteConfig,
    pub tree: ContentTree,
    pub templates: TemplateCache,
}

impl BuildContext {
    pub fn new(config: SiteConfig) -> Self {
        let templates = TemplateCache::new(config.templates_dir.clone());
        BuildContext {
            config,
            tree: ContentTree::new(),
            templates,
        }
    }
}

/// Counts reported after a successful build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub sections: usize,
    /// Rendered files written, homepage and section indexes included
    pub pages: usize,
    pub assets: usize,
    pub sitemap_entries: usize,
    pub elapsed: Duration,
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages in {} sections, {} assets, {} sitemap entries in {:.2?}",
            self.pages, self.sections, self.assets, self.sitemap_entries, self.elapsed
        )
    }
}
