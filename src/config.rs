//! Configuration management with YAML support

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::content::ContentKind;
use crate::history::DEFAULT_CAPACITY;
use crate::synth::Latency;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Content type assumed by `analyze` when `--type` is not given
    #[serde(default = "default_content_kind")]
    pub default_type: ContentKind,

    /// Fixed seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Simulated latency bounds in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_min_latency_ms")]
    pub min_ms: u64,

    #[serde(default = "default_max_latency_ms")]
    pub max_ms: u64,
}

/// Session history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

/// Report output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Default value functions
fn default_min_latency_ms() -> u64 {
    1500
}

fn default_max_latency_ms() -> u64 {
    2500
}

fn default_history_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_content_kind() -> ContentKind {
    ContentKind::Text
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            default_type: default_content_kind(),
            seed: None,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: default_min_latency_ms(),
            max_ms: default_max_latency_ms(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    /// Searches in order:
    /// 1. Provided path
    /// 2. ./truthguard.yaml (current directory)
    /// 3. ~/.config/truthguard/truthguard.yaml
    pub fn load(path: &str) -> Result<Self> {
        let search_paths = vec![
            shellexpand::tilde(path).to_string(),
            "truthguard.yaml".to_string(),
            shellexpand::tilde("~/.config/truthguard/truthguard.yaml").to_string(),
        ];

        for search_path in &search_paths {
            if std::path::Path::new(search_path).exists() {
                let content = std::fs::read_to_string(search_path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        // No config file found, use defaults
        Ok(Config::default())
    }

    /// Simulated latency, rejecting inverted bounds
    pub fn latency(&self) -> Result<Latency> {
        let min_ms = self.analysis.latency.min_ms;
        let max_ms = self.analysis.latency.max_ms;
        if min_ms > max_ms {
            bail!(
                "analysis.latency.min_ms ({}) is greater than max_ms ({})",
                min_ms,
                max_ms
            );
        }
        Ok(Latency::new(
            Duration::from_millis(min_ms),
            Duration::from_millis(max_ms),
        ))
    }

    /// History capacity, never below one
    pub fn history_capacity(&self) -> usize {
        self.history.capacity.max(1)
    }
}
