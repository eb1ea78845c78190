use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host prepended to every sitemap URL
    #[serde(default = "defaults::default_hostname")]
    pub hostname: String,

    /// Markdown sources
    #[serde(default = "defaults::default_content_dir")]
    pub content_dir: PathBuf,

    /// Holds `base.html`, `list.html` and `post.html`
    #[serde(default = "defaults::default_templates_dir")]
    pub templates_dir: PathBuf,

    #[serde(default = "defaults::default_output_dir")]
    pub output_dir: PathBuf,

    /// Static files copied verbatim into the output root
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            hostname: defaults::default_hostname(),
            content_dir: defaults::default_content_dir(),
            templates_dir: defaults::default_templates_dir(),
            output_dir: defaults::default_output_dir(),
            assets_dir: None,
        }
    }
}

impl SiteConfig {
    /// Configuration for a site rooted at `site_dir`, all defaults
    pub fn for_site(site_dir: &Path) -> Self {
        let mut config = SiteConfig::default();
        config.resolve_paths(site_dir);
        config
    }

    /// Make every relative directory relative to `site_dir`
    pub fn resolve_paths(&mut self, site_dir: &Path) {
        resolve(&mut self.content_dir, site_dir);
        resolve(&mut self.templates_dir, site_dir);
        resolve(&mut self.output_dir, site_dir);
        if let Some(assets) = self.assets_dir.as_mut() {
            resolve(assets, site_dir);
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(output) = &overrides.output_dir {
            self.output_dir = output.clone();
        }
        if let Some(hostname) = &overrides.hostname {
            self.hostname = hostname.clone();
        }
    }

    /// Directories whose changes require a rebuild
    pub fn watched_dirs(&self) -> Vec<&Path> {
        let mut dirs = vec![self.content_dir.as_path(), self.templates_dir.as_path()];
        if let Some(assets) = &self.assets_dir {
            dirs.push(assets.as_path());
        }
        dirs
    }
}

fn resolve(path: &mut PathBuf, base: &Path) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}

/// Values given on the command line, taking precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub hostname: Option<String>,
}
