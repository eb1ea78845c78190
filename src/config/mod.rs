mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use loader::{config_path, load_config};
pub use defaults::DEFAULT_CONFIG_FILE;
