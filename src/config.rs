//! Generator configuration.
//!
//! Settings come from a TOML file:
//!
//! ```toml
//! package = "entity"
//! ```
//!
//! [`Config::load`] looks at an explicit path first, then `./sql2gorm.toml`,
//! then `<config dir>/sql2gorm/config.toml`, and falls back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{GormError, GormResult};
use crate::model::DEFAULT_PACKAGE;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG: &str = "sql2gorm.toml";

/// Main generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Go package name written at the top of the output
    pub package: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> GormResult<Self> {
        toml::from_str(content).map_err(|e| GormError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> GormResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GormError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| GormError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from `explicit` if given, otherwise from the first default
    /// location that exists.
    pub fn load(explicit: Option<&Path>) -> GormResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        for path in default_locations() {
            if path.is_file() {
                debug!(path = %path.display(), "loading config");
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("sql2gorm").join("config.toml"));
    }
    paths
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an existing configuration
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the Go package name
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.config.package = package.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
