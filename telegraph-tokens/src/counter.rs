use moka::sync::Cache;
use std::sync::Arc;
use tiktoken_rs::CoreBPE;

use telegraph_core::config::defaults;
use telegraph_core::errors::{CountingError, TelegraphResult};
use telegraph_core::traits::ITokenCounter;

/// Loaded encoders are large and expensive to build; a run touches at most
/// a handful of models.
const ENCODER_CACHE_CAPACITY: u64 = 8;

/// Accurate token counter wrapping tiktoken, keyed by model identifier.
/// Resolved encoders are cached per model, and counts per blake3 content
/// hash, so repeated measurement of the same text is cheap.
pub struct TokenCounter {
    encoders: Cache<String, Arc<CoreBPE>>,
    counts: Cache<String, usize>,
}

impl TokenCounter {
    /// Create a new TokenCounter with the given count-cache capacity.
    pub fn new(cache_capacity: u64) -> Self {
        Self {
            encoders: Cache::new(ENCODER_CACHE_CAPACITY),
            counts: Cache::new(cache_capacity),
        }
    }

    /// Resolve the encoder for a model identifier, loading it on first use.
    /// An identifier tiktoken maps to no encoding is an `UnknownModel` error.
    fn encoder(&self, model: &str) -> TelegraphResult<Arc<CoreBPE>> {
        if let Some(bpe) = self.encoders.get(model) {
            return Ok(bpe);
        }
        let bpe =
            tiktoken_rs::get_bpe_from_model(model).map_err(|e| CountingError::UnknownModel {
                model: model.to_string(),
                reason: e.to_string(),
            })?;
        let bpe = Arc::new(bpe);
        self.encoders.insert(model.to_string(), Arc::clone(&bpe));
        Ok(bpe)
    }

    /// Count tokens in the given text under the named model (uncached).
    pub fn count(&self, text: &str, model: &str) -> TelegraphResult<usize> {
        if text.is_empty() {
            return Ok(0);
        }
        let bpe = self.encoder(model)?;
        Ok(bpe.encode_ordinary(text).len())
    }

    /// Count tokens with blake3 content-hash caching.
    /// Repeated calls with the same model and text return the cached result.
    pub fn count_cached(&self, text: &str, model: &str) -> TelegraphResult<usize> {
        if text.is_empty() {
            return Ok(0);
        }
        let bpe = self.encoder(model)?;
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        let key = format!("{model}:{hash}");
        Ok(self.counts.get_with(key, || bpe.encode_ordinary(text).len()))
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_COUNT_CACHE_CAPACITY)
    }
}

impl ITokenCounter for TokenCounter {
    fn count(&self, text: &str, model: &str) -> TelegraphResult<usize> {
        self.count_cached(text, model)
    }
}
