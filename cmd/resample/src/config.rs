//! Resample settings from a YAML file and command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use giztoy_resample::{Config, SampleFormat};
use serde::Deserialize;

/// Settings file format.
///
/// Every field is optional; flags given on the command line win.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub channels: Option<i64>,
    #[serde(default)]
    pub from_rate: Option<i64>,
    #[serde(default)]
    pub to_rate: Option<i64>,
    #[serde(default)]
    pub format: Option<SampleFormat>,
}

impl ConfigFile {
    /// Loads a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// Settings after merging file values and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub config: Config,
    pub format: SampleFormat,
}

/// Values passed on the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub channels: Option<i64>,
    pub from_rate: Option<i64>,
    pub to_rate: Option<i64>,
    pub format: Option<SampleFormat>,
}

impl Settings {
    /// Merges `file` with `flags` and validates the result.
    pub fn resolve(file: ConfigFile, flags: Overrides) -> Result<Self> {
        let channels = flags.channels.or(file.channels).unwrap_or(1);
        let from_rate = flags
            .from_rate
            .or(file.from_rate)
            .context("source rate is required (--from or from_rate)")?;
        let to_rate = flags
            .to_rate
            .or(file.to_rate)
            .context("target rate is required (--to or to_rate)")?;

        let config = Config::new(channels, from_rate, to_rate)?;
        let format = flags.format.or(file.format).unwrap_or_default();
        Ok(Self { config, format })
    }
}
