//! # telegraph-core
//!
//! Foundation crate for the telegraph compression system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod annotation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod policy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use annotation::{PosTag, Sentence, Token};
pub use config::TelegraphConfig;
pub use errors::{TelegraphError, TelegraphResult};
pub use models::{CompressedText, CompressionReport};
pub use policy::RemovalPolicy;
