use std::path::{Component, Path, PathBuf};

use log::{debug, warn};

use crate::config::SiteConfig;
use crate::utils::error::{SiteError, SiteResult};

/// Validate the configuration
pub fn validate_config(config: &SiteConfig) -> SiteResult<()> {
    validate_hostname(&config.hostname)?;
    validate_output_directory(config)?;

    if !config.templates_dir.is_dir() {
        warn!("Templates directory does not exist: {}", config.templates_dir.display());
    }

    debug!("Configuration valid: {:?}", config);
    Ok(())
}

fn validate_hostname(hostname: &str) -> SiteResult<()> {
    let host = hostname
        .strip_prefix("https://")
        .or_else(|| hostname.strip_prefix("http://"))
        .ok_or_else(|| {
            SiteError::Config(format!(
                "hostname must start with http:// or https://, got '{}'",
                hostname
            ))
        })?;

    if host.trim_end_matches('/').is_empty() {
        return Err(SiteError::Config(format!("hostname '{}' has no host part", hostname)));
    }
    Ok(())
}

fn validate_output_directory(config: &SiteConfig) -> SiteResult<()> {
    if normalize(&config.output_dir) == normalize(&config.content_dir) {
        return Err(SiteError::Config(format!(
            "output directory must differ from the content directory: {}",
            config.output_dir.display()
        )));
    }

    if config.output_dir.exists() && !config.output_dir.is_dir() {
        return Err(SiteError::Config(format!(
            "output path exists but is not a directory: {}",
            config.output_dir.display()
        )));
    }
    Ok(())
}

/// Lexically drop `.` components so `site/./public` equals `site/public`
fn normalize(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
