mod build;
mod serve;
mod clean;

pub use build::handle_build_command;
pub use serve::handle_serve_command;
pub use clean::handle_clean_command;

use log::{debug, error};
use std::path::Path;

use crate::config::{self, ConfigOverrides, SiteConfig};

/// Load the site configuration, logging the failure if there is one
fn load_site_config(
    site_dir: &Path,
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Option<SiteConfig> {
    if let Some(path) = config::config_path(site_dir, config_file) {
        debug!("Using configuration file {}", path.display());
    }

    match config::load_config(site_dir, config_file, overrides) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!("Failed to load config: {}", e);
            None
        }
    }
}
