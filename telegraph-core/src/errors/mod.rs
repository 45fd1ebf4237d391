//! Error types for all telegraph subsystems.
//!
//! Subsystem errors stay in their own enums; `TelegraphError` aggregates
//! them so every crate can share one `TelegraphResult` alias. Errors
//! propagate unrecovered, so each variant carries the context a caller
//! needs to report the failure.

pub mod annotation_error;
pub mod counting_error;

pub use annotation_error::AnnotationError;
pub use counting_error::CountingError;

/// Top-level error type for the telegraph system.
#[derive(Debug, thiserror::Error)]
pub enum TelegraphError {
    #[error("annotation failed: {0}")]
    AnnotationError(#[from] AnnotationError),

    #[error("token counting failed: {0}")]
    CountingError(#[from] CountingError),

    /// A reduction percentage over zero original tokens has no defined
    /// value, so it is rejected rather than reported as 0 or NaN.
    #[error("original text has zero tokens, reduction is undefined")]
    EmptyOriginal,

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result alias used throughout the telegraph crates.
pub type TelegraphResult<T> = Result<T, TelegraphError>;
