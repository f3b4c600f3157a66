use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use crate::status::thresholds::StatusThresholds;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub thresholds: StatusThresholds,

    /// Flat JSON venue cache.
    pub venues_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            thresholds: StatusThresholds::default(),
            venues_file: PathBuf::from(Self::DEFAULT_VENUES_FILE),
        }
    }
}

impl AppConfig {
    pub const FILE_NAME: &'static str = "happyhour.yml";
    pub const DEFAULT_VENUES_FILE: &'static str = "data/venues.json";

    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read config {}", path.display()));
            }
        };

        Self::from_yaml_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(raw).context("failed to parse config yaml")?;

        config.validate().context("config validation failed")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        if self.venues_file.as_os_str().is_empty() {
            bail!("venues_file must not be empty");
        }
        Ok(())
    }
}
