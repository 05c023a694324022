//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::record::ConfigRecord;

/// A parsed configuration document.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    root: toml::Table,
}

impl ConfigSource {
    /// Parse a configuration document from a string.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let root: toml::Table = toml::from_str(content)?;
        Ok(Self { root })
    }

    /// The top-level record of the document.
    pub fn root(&self) -> ConfigRecord<'_> {
        ConfigRecord::new(&self.root, "config")
    }
}

impl FromStr for ConfigSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Load a configuration document from a TOML file.
pub fn load_config(path: &Path) -> ConfigResult<ConfigSource> {
    let content = fs::read_to_string(path)?;
    let source = ConfigSource::parse(&content)?;

    tracing::debug!(path = %path.display(), "Configuration file parsed");
    Ok(source)
}
