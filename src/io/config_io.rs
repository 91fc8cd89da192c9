use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read config.toml from the data directory. Missing or unparseable
/// files fall back to defaults; config is optional and read-only.
pub fn read_config(data_dir: &Path) -> Config {
    let path = data_dir.join("config.toml");
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };
    toml::from_str(&content).unwrap_or_default()
}
