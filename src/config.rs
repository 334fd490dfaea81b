use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Delphi configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DelphiConfig {
    /// Fit settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Forecast settings.
    #[serde(default)]
    pub forecast: ForecastToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_order")]
    pub order: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            order: default_order(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_order() -> usize {
    1
}
fn default_tolerance() -> f64 {
    1e-10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_horizon")]
    pub horizon: usize,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
        }
    }
}

fn default_horizon() -> usize {
    1
}

/// Loads the TOML configuration, or defaults if no path was given.
pub fn load(path: Option<&Path>) -> Result<DelphiConfig> {
    let Some(path) = path else {
        return Ok(DelphiConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
