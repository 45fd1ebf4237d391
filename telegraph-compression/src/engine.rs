use tracing::debug;

use telegraph_core::annotation::Sentence;
use telegraph_core::errors::TelegraphResult;
use telegraph_core::models::CompressedText;
use telegraph_core::policy::RemovalPolicy;
use telegraph_core::traits::ICompressor;

use crate::filter;

/// Compression engine implementing the telegraphic filtering pass.
///
/// Pure and deterministic: one pass over the sentences, no lookahead, chunk
/// order always matching sentence order.
pub struct CompressionEngine;

impl CompressionEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ICompressor for CompressionEngine {
    fn compress(
        &self,
        sentences: &[Sentence],
        policy: &RemovalPolicy,
    ) -> TelegraphResult<CompressedText> {
        let mut compressed = CompressedText::new();

        for (index, sentence) in sentences.iter().enumerate() {
            match filter::filter_sentence(sentence, policy) {
                Some(chunk) => compressed.push(chunk),
                None => debug!(
                    sentence = index,
                    tokens = sentence.len(),
                    "sentence fully filtered, no chunk emitted"
                ),
            }
        }

        debug!(
            sentences = sentences.len(),
            chunks = compressed.len(),
            "telegraphic filtering complete"
        );

        Ok(compressed)
    }
}
