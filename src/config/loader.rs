use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults::DEFAULT_CONFIG_FILE;
use crate::config::types::{ConfigOverrides, SiteConfig};
use crate::config::validation;
use crate::utils::error::{SiteError, SiteResult};

/// Load site configuration.
///
/// With no explicit `config_file`, `quire.json` in `site_dir` is used when
/// present and defaults otherwise. Relative directories resolve against
/// `site_dir`; command-line overrides are applied before validation.
pub fn load_config(
    site_dir: &Path,
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> SiteResult<SiteConfig> {
    let mut config = match config_file {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = site_dir.join(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                read_config_file(&default_path)?
            } else {
                debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, site_dir.display());
                SiteConfig::default()
            }
        }
    };

    config.apply_overrides(overrides);
    config.resolve_paths(site_dir);
    validation::validate_config(&config)?;

    Ok(config)
}

/// Parse one configuration file, picking the format from its extension
fn read_config_file(path: &Path) -> SiteResult<SiteConfig> {
    debug!("Loading configuration from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        SiteError::Config(format!("Failed to read configuration file {}: {}", path.display(), e))
    })?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => serde_json::from_str(&content).map_err(|e| parse_error("JSON", path, e)),
        "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", path, e)),
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", path, e)),
        _ => Err(SiteError::Config(format!(
            "Unsupported configuration file format: {}",
            path.display()
        ))),
    }
}

fn parse_error(format: &str, path: &Path, err: impl std::fmt::Display) -> SiteError {
    SiteError::Config(format!(
        "Failed to parse {} configuration ({}): {}",
        format,
        path.display(),
        err
    ))
}

/// Path of the configuration file that `load_config` would read, if any
pub fn config_path(site_dir: &Path, config_file: Option<&Path>) -> Option<PathBuf> {
    match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => Some(site_dir.join(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None, &ConfigOverrides::default()).unwrap();

        assert_eq!(config.hostname, "http://localhost:4000");
        assert_eq!(config.content_dir, dir.path().join("content"));
        assert_eq!(config.templates_dir, dir.path().join("templates"));
        assert_eq!(config.output_dir, dir.path().join("public"));
        assert_eq!(config.assets_dir, None);
        assert_eq!(config_path(dir.path(), None), None);
    }

    #[test]
    fn test_json_partial_with_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("quire.json"),
            r#"{ "hostname": "https://example.com", "assets_dir": "static" }"#,
        )
        .unwrap();

        let config = load_config(dir.path(), None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.hostname, "https://example.com");
        assert_eq!(config.assets_dir, Some(dir.path().join("static")));
        assert_eq!(config.output_dir, dir.path().join("public"));
    }

    #[test]
    fn test_toml_and_yaml_by_extension() {
        let dir = TempDir::new().unwrap();
        let toml_path = dir.path().join("site.toml");
        fs::write(&toml_path, "hostname = \"https://toml.test\"\noutput_dir = \"out\"\n").unwrap();
        let yaml_path = dir.path().join("site.yaml");
        fs::write(&yaml_path, "hostname: https://yaml.test\ncontent_dir: /abs/content\n").unwrap();

        let overrides = ConfigOverrides::default();
        let from_toml = load_config(dir.path(), Some(&toml_path), &overrides).unwrap();
        assert_eq!(from_toml.hostname, "https://toml.test");
        assert_eq!(from_toml.output_dir, dir.path().join("out"));

        let from_yaml = load_config(dir.path(), Some(&yaml_path), &overrides).unwrap();
        assert_eq!(from_yaml.hostname, "https://yaml.test");
        assert_eq!(from_yaml.content_dir, PathBuf::from("/abs/content"));
    }

    #[test]
    fn test_overrides_win() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("quire.json"), r#"{ "hostname": "https://file.test" }"#).unwrap();
        let overrides = ConfigOverrides {
            output_dir: Some(PathBuf::from("dist")),
            hostname: Some("https://flag.test".to_string()),
        };

        let config = load_config(dir.path(), None, &overrides).unwrap();
        assert_eq!(config.hostname, "https://flag.test");
        assert_eq!(config.output_dir, dir.path().join("dist"));
    }

    #[test]
    fn test_bad_files_are_config_errors() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("quire.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            load_config(dir.path(), None, &ConfigOverrides::default()),
            Err(SiteError::Config(_))
        ));

        let ini = dir.path().join("site.ini");
        fs::write(&ini, "hostname=x").unwrap();
        assert!(matches!(
            load_config(dir.path(), Some(&ini), &ConfigOverrides::default()),
            Err(SiteError::Config(_))
        ));

        let missing = dir.path().join("missing.json");
        assert!(load_config(dir.path(), Some(&missing), &ConfigOverrides::default()).is_err());
    }

    #[test]
    fn test_invalid_hostname_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("quire.json"), r#"{ "hostname": "example.com" }"#).unwrap();
        assert!(matches!(
            load_config(dir.path(), None, &ConfigOverrides::default()),
            Err(SiteError::Config(msg)) if msg.contains("http://")
        ));
    }
}
