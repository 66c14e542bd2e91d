//! Configuration system for the stowage planner.
//!
//! Load planner configuration from TOML or YAML files to control search caps
//! and the balance tolerance without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use stowage_config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     max_expansions = 20000
//!
//!     [balance]
//!     tolerance_percent = 10
//!
//!     [reachability]
//!     max_expansions = 150
//!     early_exit = true
//! "#).unwrap();
//!
//! assert_eq!(config.max_expansions, 20_000);
//! assert_eq!(config.reachability.max_expansions, 150);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use stowage_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("planner.toml").unwrap_or_default();
//! assert_eq!(config.balance.tolerance_percent, 10);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on planner node expansions.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 5_000;

/// Default cap on expansions of the inner reachability traversal.
pub const DEFAULT_REACHABILITY_EXPANSIONS: u64 = 200;

/// Default balance tolerance as a percentage of the original total weight.
pub const DEFAULT_TOLERANCE_PERCENT: u32 = 10;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Maximum number of nodes the best-first search may expand.
    pub max_expansions: u64,

    /// Number of expansions between progress log lines. 0 disables them.
    pub progress_interval: u64,

    /// Balance goal configuration.
    pub balance: BalanceConfig,

    /// Inner reachability traversal used by the goal test.
    pub reachability: ReachabilityConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            progress_interval: 1_000,
            balance: BalanceConfig::default(),
            reachability: ReachabilityConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// holds values rejected by [`PlannerConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that caps are non-zero and the tolerance is a percentage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expansions == 0 {
            return Err(ConfigError::Invalid(
                "max_expansions must be at least 1".to_string(),
            ));
        }
        if self.reachability.max_expansions == 0 {
            return Err(ConfigError::Invalid(
                "reachability.max_expansions must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.balance.tolerance_percent) {
            return Err(ConfigError::Invalid(format!(
                "balance.tolerance_percent must be within 1..=100, got {}",
                self.balance.tolerance_percent
            )));
        }
        Ok(())
    }

    /// Sets the planner expansion cap.
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Sets the reachability expansion cap.
    pub fn with_reachability_expansions(mut self, max_expansions: u64) -> Self {
        self.reachability.max_expansions = max_expansions;
        self
    }

    /// Sets the balance tolerance percentage.
    pub fn with_tolerance_percent(mut self, percent: u32) -> Self {
        self.balance.tolerance_percent = percent;
        self
    }

    /// Enables or disables the reachability clause of the goal test.
    pub fn with_reachability_goal(mut self, enabled: bool) -> Self {
        self.reachability.enabled = enabled;
        self
    }

    /// Sets the number of expansions between progress log lines.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

/// Balance goal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BalanceConfig {
    /// A plan is balanced when `|port - starboard|` is strictly below this
    /// percentage of the original total weight.
    pub tolerance_percent: u32,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
        }
    }
}

/// Reachability traversal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReachabilityConfig {
    /// Whether a plan that already sits at the best reachable imbalance
    /// counts as a goal.
    pub enabled: bool,

    /// Maximum number of plans the traversal may expand per goal check.
    /// Keep this far below the planner's own cap.
    pub max_expansions: u64,

    /// Stop as soon as a plan within the balance tolerance is reached.
    pub early_exit: bool,
}

impl Default for ReachabilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_expansions: DEFAULT_REACHABILITY_EXPANSIONS,
            early_exit: true,
        }
    }
}

#[cfg(test)]
mod tests;
