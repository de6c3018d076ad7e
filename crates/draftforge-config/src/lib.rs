//! Configuration system for DraftForge.
//!
//! Load rule sets, pool filters and exposure bounds from TOML or YAML files
//! to control a run without code changes.
//!
//! # Examples
//!
//! Load a rule set from a TOML string:
//!
//! ```
//! use draftforge_config::RuleSetConfig;
//! use draftforge_core::RuleSet;
//!
//! let config = RuleSetConfig::from_toml_str(r#"
//!     league = "NBA"
//!     roster_size = 5
//!     salary_cap = 100
//!
//!     [[quotas]]
//!     position = "G"
//!     min = 2
//!     max = 3
//!
//!     [[quotas]]
//!     position = "F"
//!     min = 2
//!     max = 3
//! "#).unwrap();
//!
//! let rules: RuleSet = config.try_into().unwrap();
//! assert_eq!(rules.roster_size, 5);
//! ```
//!
//! Build settings programmatically:
//!
//! ```
//! use draftforge_config::OptimizerSettings;
//!
//! let settings = OptimizerSettings::new().with_random_seed(42).with_verbose(true);
//! assert_eq!(settings.random_seed, Some(42));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use draftforge_core::{DraftForgeError, Roster, RuleSet};


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

impl From<DraftForgeError> for ConfigError {
    fn from(err: DraftForgeError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

/// Solve-tuning knobs plus the caller-owned history of accepted rosters.
///
/// `existing_rosters` is read by the exposure controller when deriving hints
/// and appended to by the multi-iteration loop after every accepted solve.
/// It is deliberately excluded from serialization: rosters live for one
/// process run only.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizerSettings {
    /// Print rosters, exposure tables and failure diagnostics to stdout.
    #[serde(default)]
    pub verbose: bool,

    /// Random seed for reproducible exposure tie-breaking.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Rosters accepted so far in this run.
    #[serde(skip)]
    pub existing_rosters: Vec<Roster>,
}

impl OptimizerSettings {
    /// Creates default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables verbose reporting.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}

/// Static pool eligibility filters plus caller-supplied bans and locks.
///
/// The filters narrow the pool before the optimizer ever sees it; the ban and
/// lock lists seed the constraint overlay at the start of every iteration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlayerPoolSettings {
    /// Drop players cheaper than this.
    #[serde(default)]
    pub min_salary: Option<u32>,

    /// Drop players more expensive than this.
    #[serde(default)]
    pub max_salary: Option<u32>,

    /// Drop players projected below this.
    #[serde(default)]
    pub min_projected: Option<f64>,

    /// Names forced out of every iteration.
    #[serde(default)]
    pub banned: Vec<String>,

    /// Names forced into every iteration.
    #[serde(default)]
    pub locked: Vec<String>,
}

impl PlayerPoolSettings {
    /// Creates default (pass-everything) settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the salary floor.
    pub fn with_min_salary(mut self, min: u32) -> Self {
        self.min_salary = Some(min);
        self
    }

    /// Sets the salary ceiling.
    pub fn with_max_salary(mut self, max: u32) -> Self {
        self.max_salary = Some(max);
        self
    }

    /// Sets the projection floor.
    pub fn with_min_projected(mut self, min: f64) -> Self {
        self.min_projected = Some(min);
        self
    }

    /// Bans a player for the whole run.
    pub fn with_banned(mut self, name: impl Into<String>) -> Self {
        self.banned.push(name.into());
        self
    }

    /// Locks a player for the whole run.
    pub fn with_locked(mut self, name: impl Into<String>) -> Self {
        self.locked.push(name.into());
        self
    }

    /// Loads settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Target appearance-frequency window for one player across a run.
///
/// `min` and `max` are fractions of accepted rosters in `[0, 1]`. Bounds are
/// immutable for the whole run. Unachievable bounds are not validated here;
/// the post-run deviation report is the designed signal for them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExposureBound {
    /// Player name the bound applies to.
    pub name: String,

    /// Minimum fraction of rosters containing the player.
    #[serde(default)]
    pub min: f64,

    /// Maximum fraction of rosters containing the player.
    #[serde(default = "default_max_exposure")]
    pub max: f64,
}

fn default_max_exposure() -> f64 {
    1.0
}

impl ExposureBound {
    /// Creates a bound for one player.
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        ExposureBound {
            name: name.into(),
            min,
            max,
        }
    }
}

/// A file-loadable set of exposure bounds plus an optional seed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExposureConfig {
    /// Per-player bounds.
    #[serde(default)]
    pub bounds: Vec<ExposureBound>,

    /// Seed for randomized exposure targets.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl ExposureConfig {
    /// Parses exposure configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses exposure configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// One quota row of a file-loadable rule set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QuotaConfig {
    /// Position name.
    pub position: String,

    /// Minimum selected players at this position.
    #[serde(default)]
    pub min: u32,

    /// Maximum selected players at this position.
    pub max: u32,
}

/// File-loadable rule set definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleSetConfig {
    /// League identifier.
    pub league: String,

    /// Exact number of players per roster.
    pub roster_size: u32,

    /// Total salary upper bound.
    pub salary_cap: u32,

    /// Per-position count bounds.
    #[serde(default)]
    pub quotas: Vec<QuotaConfig>,

    /// Optional upper bound on players from a single team.
    #[serde(default)]
    pub max_players_per_team: Option<u32>,
}

impl RuleSetConfig {
    /// Loads a rule set from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a rule set from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a rule set from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a rule set from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a rule set from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}

impl TryFrom<RuleSetConfig> for RuleSet {
    type Error = ConfigError;

    fn try_from(config: RuleSetConfig) -> Result<Self, Self::Error> {
        let mut rules = RuleSet::new(config.league, config.roster_size, config.salary_cap);
        for quota in config.quotas {
            rules = rules.with_quota(quota.position.as_str(), quota.min, quota.max);
        }
        if let Some(limit) = config.max_players_per_team {
            rules = rules.with_team_limit(limit);
        }
        rules.validate()?;
        Ok(rules)
    }
}
