//! Configuration management
//!
//! This module handles loading and managing configuration.

use crate::error::Result;
use crate::graph::{Direction, VisibilityGraphBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Graph construction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub direction: Direction,
    pub parallel: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Undirected,
            parallel: false,
        }
    }
}

impl GraphConfig {
    /// Builder configured from this section
    pub fn builder(&self) -> VisibilityGraphBuilder {
        VisibilityGraphBuilder::new(self.direction).with_parallel(self.parallel)
    }
}

/// Input configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// CSV columns to stack, all columns when absent
    pub columns: Option<Vec<String>>,
}

/// ECG beat segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatsConfig {
    pub before: usize,
    pub after: usize,
    pub subsample_every: usize,
}

impl Default for BeatsConfig {
    fn default() -> Self {
        Self {
            before: 100,
            after: 180,
            subsample_every: 10,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub input: InputConfig,
    pub beats: BeatsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from file or use default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Config::default();
        config.save(path)
    }
}
