use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Summary settings.
    #[serde(default)]
    pub summary: SummaryToml,

    /// Cancellation settings.
    #[serde(default)]
    pub cancel: CancelToml,
}

impl AlmanacConfig {
    /// Reads the config at `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    #[serde(default = "default_events")]
    pub events: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            events: default_events(),
        }
    }
}

fn default_events() -> PathBuf {
    PathBuf::from("events.toml")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryToml {
    #[serde(default = "default_summary_months")]
    pub months: Vec<String>,
}

impl Default for SummaryToml {
    fn default() -> Self {
        Self {
            months: default_summary_months(),
        }
    }
}

fn default_summary_months() -> Vec<String> {
    vec!["february".to_string(), "march".to_string()]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CancelToml {
    #[serde(default = "default_cancel_months")]
    pub months: Vec<String>,
    #[serde(default = "default_weekday")]
    pub weekday: u8,
}

impl Default for CancelToml {
    fn default() -> Self {
        Self {
            months: default_cancel_months(),
            weekday: default_weekday(),
        }
    }
}

fn default_cancel_months() -> Vec<String> {
    ["february", "march", "may", "june"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_weekday() -> u8 {
    6
}
