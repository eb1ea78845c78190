use std::path::PathBuf;

/// Default configuration file, looked up in the site directory
pub const DEFAULT_CONFIG_FILE: &str = "quire.json";

pub fn default_hostname() -> String {
    "http://localhost:4000".to_string()
}

pub fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

pub fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}
