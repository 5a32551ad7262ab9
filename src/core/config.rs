//! Simulation configuration
//!
//! Values can come from a TOML file; anything missing falls back to the
//! defaults below. Command-line flags override the file before the config
//! is installed globally.

use crate::core::error::{GenomyError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of steps to run after the initial environment
    pub steps: usize,

    /// Minimum gene count before `evolve` evaluates genes in parallel
    ///
    /// Small genomes finish faster on one thread; the rayon fan-out only
    /// pays off for large rule sets.
    pub parallel_threshold: usize,

    /// Print the parsed genome before running
    pub show_rules: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            parallel_threshold: 1000,
            show_rules: false,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply command-line overrides and validate the result
    ///
    /// An explicit step count replaces the configured one; `show_rules`
    /// can only be switched on.
    pub fn with_overrides(mut self, steps: Option<usize>, show_rules: bool) -> Result<Self> {
        if let Some(steps) = steps {
            self.steps = steps;
        }
        self.show_rules |= show_rules;
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(GenomyError::Config(
                "parallel_threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

/// Get the global simulation config (initializes with defaults if not set)
pub fn config() -> &'static SimulationConfig {
    CONFIG.get_or_init(SimulationConfig::default)
}

/// Set the global simulation config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: SimulationConfig) -> std::result::Result<(), SimulationConfig> {
    CONFIG.set(config)
}
