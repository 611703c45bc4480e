// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::Result;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from the default file location.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(&Self::default_config_path()))
    }

    /// Load configuration with precedence:
    /// 1. Environment variables (highest, `HONYAKU_SECTION__KEY`)
    /// 2. Config file at `path` (optional)
    /// 3. Defaults (lowest)
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("HONYAKU")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".honyaku")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
