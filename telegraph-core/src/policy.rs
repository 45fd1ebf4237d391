//! The removal policy: which tokens telegraphic compression drops.

use std::collections::HashSet;

use crate::annotation::PosTag;
use crate::config::defaults;

/// Decides which annotated tokens are dropped during compression.
///
/// Two independent sets: part-of-speech categories that are grammatically
/// predictable, and low-information surface forms dropped regardless of
/// category. Surface membership is checked against the token's surface text,
/// never its lemma, and is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPolicy {
    drop_pos: HashSet<PosTag>,
    drop_surface: HashSet<String>,
}

impl RemovalPolicy {
    /// Build a policy from explicit sets.
    ///
    /// Surface forms are lowercased on the way in so membership checks stay
    /// case-insensitive no matter how the caller spelled them.
    pub fn new<P, S>(drop_pos: P, drop_surface: S) -> Self
    where
        P: IntoIterator<Item = PosTag>,
        S: IntoIterator<Item = String>,
    {
        Self {
            drop_pos: drop_pos.into_iter().collect(),
            drop_surface: drop_surface
                .into_iter()
                .map(|form| form.to_lowercase())
                .collect(),
        }
    }

    /// A policy that drops nothing (punctuation is still dropped by the
    /// filter itself).
    pub fn empty() -> Self {
        Self {
            drop_pos: HashSet::new(),
            drop_surface: HashSet::new(),
        }
    }

    /// Whether tokens of this part-of-speech category are dropped.
    pub fn drops_pos(&self, pos: PosTag) -> bool {
        self.drop_pos.contains(&pos)
    }

    /// Whether this surface form is dropped. The check lowercases its input,
    /// so `"Just"` and `"JUST"` match a stored `"just"`.
    pub fn drops_surface(&self, surface: &str) -> bool {
        self.drop_surface.contains(&surface.to_lowercase())
    }
}

impl Default for RemovalPolicy {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_DROP_POS,
            defaults::DEFAULT_DROP_SURFACE.map(str::to_string),
        )
    }
}
