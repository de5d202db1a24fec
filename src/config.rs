use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

/// Top-level calsun configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalsunConfig {
    /// Location settings.
    #[serde(default)]
    pub location: LocationConfig,

    /// Number of days to compute.
    #[serde(default)]
    pub days: Option<u32>,

    /// Event kind to leave out.
    #[serde(default)]
    pub exclude: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub name: Option<String>,
}

/// Raw request values after merging CLI flags over the config file.
#[derive(Debug, Default, PartialEq)]
pub struct RequestValues {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub name: Option<String>,
    pub days: Option<String>,
    pub exclude: Option<String>,
}

impl CalsunConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn merge(self, cli: &Cli) -> RequestValues {
        RequestValues {
            lat: cli
                .lat
                .clone()
                .or_else(|| self.location.lat.map(|v| v.to_string())),
            lng: cli
                .lng
                .clone()
                .or_else(|| self.location.lng.map(|v| v.to_string())),
            name: cli.name.clone().or(self.location.name),
            days: cli.days.clone().or_else(|| self.days.map(|d| d.to_string())),
            exclude: cli.exclude.clone().or(self.exclude),
        }
    }
}
