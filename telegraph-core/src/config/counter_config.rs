use serde::{Deserialize, Serialize};

use super::defaults;

/// Token counting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Model identifier whose tokenizer measures both texts.
    pub model: String,
    /// Capacity of the per-text count cache.
    pub cache_capacity: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            cache_capacity: defaults::DEFAULT_COUNT_CACHE_CAPACITY,
        }
    }
}
