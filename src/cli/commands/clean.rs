use log::{error, info};
use std::path::Path;
use std::process::ExitCode;

use crate::config::ConfigOverrides;
use crate::utils::fs::remove_directory;

use super::load_site_config;

/// Handle the clean command
pub fn handle_clean_command(site_dir: &Path, config_file: Option<&Path>) -> ExitCode {
    let Some(config) = load_site_config(site_dir, config_file, &ConfigOverrides::default()) else {
        return ExitCode::FAILURE;
    };

    info!("Cleaning site at {}", config.output_dir.display());
    match remove_directory(&config.output_dir) {
        Ok(()) => {
            info!("Site cleaned successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to clean site: {}", e);
            ExitCode::FAILURE
        }
    }
}
