use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::exclusion::IgnoreLists;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub thresholds: ThresholdSet,
    #[serde(default)]
    pub ignore: IgnoreLists,
}

/// Where device data is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// JSON capture of the array's listings
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from the default path, or defaults if no file exists there
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_default(&path)
    }

    /// Load from a specific path, or defaults if the file is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Layers command-line values over the file: set thresholds replace
    /// file thresholds, ignore lists are appended to the file's lists.
    #[must_use]
    pub fn with_overrides(self, thresholds: ThresholdSet, ignore: IgnoreLists) -> Self {
        Self {
            source: self.source,
            thresholds: thresholds.or(&self.thresholds),
            ignore: self.ignore.extend(ignore),
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("msacheck").join("config.toml"))
    }
}
