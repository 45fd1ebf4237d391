use crate::errors::TelegraphResult;

/// Token counting capability, keyed by model identifier.
pub trait ITokenCounter: Send + Sync {
    /// Count the tokens of `text` under the named model's tokenization
    /// scheme. Empty text counts as zero without touching an encoder.
    fn count(&self, text: &str, model: &str) -> TelegraphResult<usize>;
}
