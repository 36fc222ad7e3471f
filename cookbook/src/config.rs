//! Configuration for the cookbook

use chrono::Weekday;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local config file
pub const LOCAL_CONFIG: &str = "cookbook.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Load the built-in seed recipes at startup
    pub seed: bool,

    /// First day of the week shown by the week view
    #[serde(rename = "week-start")]
    pub week_start: WeekStart,

    /// Number of days the shopping list covers by default
    #[serde(rename = "shopping-days")]
    pub shopping_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: true,
            week_start: WeekStart::default(),
            shopping_days: 7,
        }
    }
}

/// Day a planning week begins on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicitly requested file must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let candidates = [
            Some(PathBuf::from(LOCAL_CONFIG)),
            dirs::config_dir().map(|dir| dir.join("cookbook").join(LOCAL_CONFIG)),
        ];

        for path in candidates.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                    }
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).context(format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}
