//! Configuration for the normalization CLI
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (bookland.toml)
//! - Environment variables (BOOKLAND_*)
//!
//! ## Example config file (bookland.toml):
//! ```toml
//! [catalog]
//! path = "./catalog.json"
//! ```
//!
//! The engine itself takes no configuration; this is wiring for the
//! `isbn-normalize` binary only.

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the normalization CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// UPC catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file; UPC scans fail resolution without one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl NormalizerConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = ["bookland.toml", ".bookland.toml", "config/bookland.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "bookland", "bookland") {
            let xdg_config = config_dir.config_dir().join("bookland.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Load from environment variables (BOOKLAND_*)
        builder = builder.add_source(
            Environment::with_prefix("BOOKLAND")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Get the catalog path (resolves relative paths)
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.path.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                std::env::current_dir().unwrap_or_default().join(p)
            }
        })
    }
}
