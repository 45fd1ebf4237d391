use serde::{Deserialize, Serialize};

use super::defaults;
use crate::annotation::PosTag;
use crate::policy::RemovalPolicy;

/// Removal policy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Part-of-speech categories to drop, as wire labels (`"DET"`, `"ADP"`, ...).
    pub drop_pos: Vec<PosTag>,
    /// Surface forms to drop regardless of category.
    pub drop_surface: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            drop_pos: defaults::DEFAULT_DROP_POS.to_vec(),
            drop_surface: defaults::DEFAULT_DROP_SURFACE
                .iter()
                .map(|form| form.to_string())
                .collect(),
        }
    }
}

impl From<&PolicyConfig> for RemovalPolicy {
    fn from(config: &PolicyConfig) -> Self {
        RemovalPolicy::new(
            config.drop_pos.iter().copied(),
            config.drop_surface.iter().cloned(),
        )
    }
}
