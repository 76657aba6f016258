// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordinator and harness configuration
//!
//! Loaded from TOML. Durations use humantime notation (`"250ms"`, `"2s"`).

use crate::coordination::CoordinatorError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config defines no coordinators")]
    NoCoordinators,

    #[error("duplicate coordinator name: {0}")]
    DuplicateName(String),

    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),
}

/// Upper bounds for the simulated work delays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pacing {
    /// Longest time a read holds its slot
    #[serde(with = "humantime_serde")]
    pub read_time: Duration,
    /// Longest time a write holds every slot
    #[serde(with = "humantime_serde")]
    pub write_time: Duration,
    /// Longest idle time of the writer between writes
    #[serde(with = "humantime_serde")]
    pub write_interval: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            read_time: Duration::from_secs(1),
            write_time: Duration::from_secs(1),
            write_interval: Duration::from_secs(1),
        }
    }
}

impl Pacing {
    /// No delays at all
    pub fn instant() -> Self {
        Self {
            read_time: Duration::ZERO,
            write_time: Duration::ZERO,
            write_interval: Duration::ZERO,
        }
    }

    pub fn with_read_time(mut self, read_time: Duration) -> Self {
        self.read_time = read_time;
        self
    }

    pub fn with_write_time(mut self, write_time: Duration) -> Self {
        self.write_time = write_time;
        self
    }

    pub fn with_write_interval(mut self, write_interval: Duration) -> Self {
        self.write_interval = write_interval;
        self
    }
}

/// One coordinator and its workers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinatorConfig {
    /// Name used in logs and stats
    pub name: String,
    /// Maximum number of reads in progress at once
    pub max_reads: usize,
    /// Number of reader workers to launch
    #[serde(default)]
    pub readers: usize,
    #[serde(default)]
    pub pacing: Pacing,
}

impl CoordinatorConfig {
    pub fn new(name: impl Into<String>, max_reads: usize, readers: usize) -> Self {
        Self {
            name: name.into(),
            max_reads,
            readers,
            pacing: Pacing::default(),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn validate(&self) -> Result<(), CoordinatorError> {
        if self.max_reads == 0 {
            return Err(CoordinatorError::InvalidCapacity {
                name: self.name.clone(),
                max_reads: self.max_reads,
            });
        }
        Ok(())
    }
}

fn default_run_for() -> Duration {
    Duration::from_secs(2)
}

/// A set of coordinators run side by side for a fixed period
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// How long to run before shutting everything down
    #[serde(with = "humantime_serde", default = "default_run_for")]
    pub run_for: Duration,
    /// Seed for the simulated work; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(rename = "coordinator", default)]
    pub coordinators: Vec<CoordinatorConfig>,
}

impl Default for HarnessConfig {
    /// Two coordinators, `First` (3 reads, 6 readers) and `Second`
    /// (2 reads, 2 readers), for two seconds.
    fn default() -> Self {
        Self {
            run_for: default_run_for(),
            seed: None,
            coordinators: vec![
                CoordinatorConfig::new("First", 3, 6),
                CoordinatorConfig::new("Second", 2, 2),
            ],
        }
    }
}

impl HarnessConfig {
    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse without validating
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn with_run_for(mut self, run_for: Duration) -> Self {
        self.run_for = run_for;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coordinators.is_empty() {
            return Err(ConfigError::NoCoordinators);
        }

        let mut names = HashSet::new();
        for coordinator in &self.coordinators {
            if !names.insert(coordinator.name.as_str()) {
                return Err(ConfigError::DuplicateName(coordinator.name.clone()));
            }
            coordinator.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
