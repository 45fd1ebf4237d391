use telegraph_core::errors::{TelegraphError, TelegraphResult};
use telegraph_core::traits::ITokenCounter;

/// Before/after token counts of one compression run.
///
/// Both counts must come from the same model's tokenizer or the percentage
/// is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenReduction {
    pub original_tokens: usize,
    pub compressed_tokens: usize,
}

impl TokenReduction {
    pub fn new(original_tokens: usize, compressed_tokens: usize) -> Self {
        Self {
            original_tokens,
            compressed_tokens,
        }
    }

    /// Count both texts under the named model's tokenization scheme.
    pub fn measure(
        counter: &dyn ITokenCounter,
        model: &str,
        original: &str,
        compressed: &str,
    ) -> TelegraphResult<Self> {
        Ok(Self {
            original_tokens: counter.count(original, model)?,
            compressed_tokens: counter.count(compressed, model)?,
        })
    }

    /// Token reduction as a percentage of the original count.
    ///
    /// Negative when compression inflated the text. Zero original tokens
    /// have no defined reduction and are rejected, never reported as 0 or
    /// NaN.
    pub fn percentage(&self) -> TelegraphResult<f64> {
        if self.original_tokens == 0 {
            return Err(TelegraphError::EmptyOriginal);
        }
        let original = self.original_tokens as f64;
        let compressed = self.compressed_tokens as f64;
        Ok((original - compressed) / original * 100.0)
    }
}
