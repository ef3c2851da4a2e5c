//! Run configuration loaded from an optional TOML file.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::ballistics::DEFAULT_TIME_INTERVALS;
use crate::core::gravity::GravityTable;
use crate::core::validate::validate_intervals;
use crate::error::TrajectoryError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Number of equal time intervals `N`; the path has `N + 1` samples.
    pub time_intervals: usize,
    /// Replacement for the built-in per-body gravity constants.
    pub gravity_table: Option<Vec<f64>>,
    pub plot: PlotConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            time_intervals: DEFAULT_TIME_INTERVALS.get(),
            gravity_table: None,
            plot: PlotConfig::default(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            output_dir: PathBuf::from("artifacts"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] TrajectoryError),
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.intervals()?;
        config.gravity()?;
        Ok(config)
    }

    pub fn intervals(&self) -> Result<NonZeroUsize, TrajectoryError> {
        validate_intervals(self.time_intervals)
    }

    pub fn gravity(&self) -> Result<GravityTable, TrajectoryError> {
        match &self.gravity_table {
            Some(overrides) => GravityTable::new(overrides),
            None => Ok(GravityTable::default()),
        }
    }
}

/// Loads and validates a config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config = AppConfig::from_toml_str(&contents)?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}
