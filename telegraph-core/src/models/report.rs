use serde::{Deserialize, Serialize};

/// The product of one end-to-end compression run.
///
/// Both token counts come from the same model's tokenizer; counts taken
/// under different model identifiers are not comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionReport {
    /// The raw input text.
    pub original_text: String,
    /// The rendered compressed text.
    pub compressed_text: String,
    /// Model identifier whose tokenizer produced the counts.
    pub model: String,
    /// Token count of the original text.
    pub original_tokens: usize,
    /// Token count of the compressed text.
    pub compressed_tokens: usize,
    /// Token reduction as a percentage. Negative when compression inflated
    /// the text under this model's tokenizer.
    pub reduction_pct: f64,
}
