/// Token counting subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum CountingError {
    #[error("no tokenizer for model '{model}': {reason}")]
    UnknownModel { model: String, reason: String },

    #[error("token encoding failed: {reason}")]
    EncodingFailed { reason: String },
}
