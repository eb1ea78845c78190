use log::{error, info};
use std::path::Path;
use std::process::ExitCode;

use crate::config::ConfigOverrides;
use crate::pipeline;

use super::load_site_config;

/// Handle the build command
pub fn handle_build_command(
    site_dir: &Path,
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> ExitCode {
    let Some(config) = load_site_config(site_dir, config_file, overrides) else {
        return ExitCode::FAILURE;
    };

    let destination = config.output_dir.clone();
    info!("Building site...");
    match pipeline::build_site(config) {
        Ok(summary) => {
            info!("Site built successfully at {} ({})", destination.display(), summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to build site: {}", e);
            ExitCode::FAILURE
        }
    }
}
