//! Configuration system for SeatPlan.
//!
//! Load engine options from TOML or YAML files so rosters and policies can
//! change without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use seatplan_config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     entities = ["Ada", "Bo", "Cy", "Di"]
//!     randomize = false
//!     backtracking = true
//!     number_of_entities_to_use = 3
//! "#).unwrap();
//!
//! assert!(!config.randomize);
//! assert_eq!(config.effective_entities(), ["Ada", "Bo", "Cy"]);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use seatplan_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("seatplan.toml").unwrap_or_default();
//! assert!(config.randomize);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn default_true() -> bool {
    true
}

/// Construction options for a seating engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Ordered, distinct entity labels.
    #[serde(default)]
    pub entities: Vec<String>,

    /// Shuffle the visitation order instead of rotating seats.
    #[serde(default = "default_true")]
    pub randomize: bool,

    /// Undo earlier placements when an entity has no eligible seat.
    #[serde(default)]
    pub backtracking: bool,

    /// Use only this many entities from the front of the list.
    #[serde(default)]
    pub number_of_entities_to_use: Option<usize>,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            randomize: true,
            backtracking: false,
            number_of_entities_to_use: None,
            random_seed: None,
        }
    }
}

impl PlannerConfig {
    /// Creates a configuration for the given entities with default policies.
    pub fn new<I, T>(entities: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
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
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the default ordering policy.
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Sets the default backtracking policy.
    pub fn with_backtracking(mut self, backtracking: bool) -> Self {
        self.backtracking = backtracking;
        self
    }

    /// Limits the engine to a prefix of the entity list.
    pub fn with_entity_limit(mut self, limit: usize) -> Self {
        self.number_of_entities_to_use = Some(limit);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Returns the entities the engine will use.
    ///
    /// A limit larger than the list keeps the whole list.
    pub fn effective_entities(&self) -> &[String] {
        let limit = self
            .number_of_entities_to_use
            .unwrap_or(self.entities.len())
            .min(self.entities.len());
        &self.entities[..limit]
    }
}
