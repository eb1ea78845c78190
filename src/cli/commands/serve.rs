use log::error;
use std::path::Path;
use std::process::ExitCode;

use crate::config::ConfigOverrides;
use crate::server::{self, ServerConfig};

use super::load_site_config;

/// Handle the serve command
pub async fn handle_serve_command(
    site_dir: &Path,
    config_file: Option<&Path>,
    host: &str,
    port: u16,
    watch: bool,
) -> ExitCode {
    let Some(config) = load_site_config(site_dir, config_file, &ConfigOverrides::default()) else {
        return ExitCode::FAILURE;
    };

    let server_config = ServerConfig::new(host, port, watch);
    match server::serve(&server_config, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
