//! # telegraph-tokens
//!
//! Accurate token counting via `tiktoken-rs`, keyed by model identifier.
//! Resolved encoders are cached per model and counts per content hash.
//! The reduction metric turns a pair of counts into the percentage the
//! compression actually saved.

pub mod counter;
pub mod reduction;

pub use counter::TokenCounter;
pub use reduction::TokenReduction;
