//! Configuration types.
//!
//! Every section deserializes with `#[serde(default)]`, so a partial TOML
//! file overrides only what it names and an empty file yields the full
//! default configuration.

pub mod counter_config;
pub mod defaults;
pub mod policy_config;

pub use counter_config::CounterConfig;
pub use policy_config::PolicyConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TelegraphError, TelegraphResult};

/// Root configuration for the telegraph system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegraphConfig {
    pub policy: PolicyConfig,
    pub counter: CounterConfig,
}

impl TelegraphConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(input: &str) -> TelegraphResult<Self> {
        toml::from_str(input).map_err(|e| TelegraphError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> TelegraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| TelegraphError::ConfigError {
            reason: e.to_string(),
        })
    }
}
