/// Annotation subsystem errors.
///
/// All of these are contract violations in externally-produced annotation,
/// not recoverable conditions. They surface as-is.
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("unknown part-of-speech tag '{tag}'")]
    UnknownTag { tag: String },

    #[error("annotated text does not match input ({expected_len} bytes annotated, {actual_len} bytes given)")]
    TextMismatch {
        expected_len: usize,
        actual_len: usize,
    },

    #[error("annotated document contains no sentences")]
    EmptyDocument,

    #[error("invalid annotated document: {reason}")]
    InvalidDocument { reason: String },
}
