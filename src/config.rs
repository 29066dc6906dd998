use crate::error::{CellarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// How `list` orders the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Storage order, i.e. the order bottles were added.
    #[default]
    Added,
    /// Alphabetical by wine name.
    Name,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Added => f.write_str("added"),
            SortOrder::Name => f.write_str("name"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CellarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "added" => Ok(SortOrder::Added),
            "name" => Ok(SortOrder::Name),
            other => Err(CellarError::Api(format!(
                "unknown sort order: {} (expected 'added' or 'name')",
                other
            ))),
        }
    }
}

/// Configuration for cellar, stored as config.json in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellarConfig {
    #[serde(default)]
    pub sort: SortOrder,
}

impl CellarConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CellarError::Io)?;
        let config: CellarConfig =
            serde_json::from_str(&content).map_err(CellarError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CellarError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CellarError::Serialization)?;
        fs::write(config_path, content).map_err(CellarError::Io)?;
        Ok(())
    }
}
