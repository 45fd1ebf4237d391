//! CompressionPipeline: orchestrates annotate → filter → count → report.

use tracing::{debug, info};

use telegraph_core::config::defaults;
use telegraph_core::errors::TelegraphResult;
use telegraph_core::models::CompressionReport;
use telegraph_core::policy::RemovalPolicy;
use telegraph_core::traits::{IAnnotator, ICompressor, ITokenCounter};
use telegraph_tokens::TokenReduction;

use crate::engine::CompressionEngine;

/// The end-to-end pipeline. Borrows its collaborator capabilities so tests
/// substitute mocks; policy and model identifier are owned per instance.
pub struct CompressionPipeline<'a> {
    annotator: &'a dyn IAnnotator,
    counter: &'a dyn ITokenCounter,
    engine: CompressionEngine,
    policy: RemovalPolicy,
    model: String,
}

impl<'a> CompressionPipeline<'a> {
    pub fn new(annotator: &'a dyn IAnnotator, counter: &'a dyn ITokenCounter) -> Self {
        Self {
            annotator,
            counter,
            engine: CompressionEngine::new(),
            policy: RemovalPolicy::default(),
            model: defaults::DEFAULT_MODEL.to_string(),
        }
    }

    /// Replace the default removal policy for this pipeline.
    pub fn with_policy(mut self, policy: RemovalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Measure under a different model's tokenization scheme.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Run the full pipeline over `text`.
    ///
    /// Collaborator failures propagate unrecovered. An original text that
    /// counts to zero tokens is rejected before a report is built, since
    /// its reduction percentage is undefined.
    pub fn run(&self, text: &str) -> TelegraphResult<CompressionReport> {
        // Step 1: Annotate (external capability).
        let sentences = self.annotator.annotate(text)?;
        debug!(sentences = sentences.len(), "annotation resolved");

        // Step 2: Filter and render.
        let compressed = self.engine.compress(&sentences, &self.policy)?;
        let compressed_text = compressed.render();

        // Step 3: Count both texts under the same model.
        let reduction = TokenReduction::measure(self.counter, &self.model, text, &compressed_text)?;

        // Step 4: Reduction percentage (zero original tokens errors here).
        let reduction_pct = reduction.percentage()?;

        info!(
            model = %self.model,
            original_tokens = reduction.original_tokens,
            compressed_tokens = reduction.compressed_tokens,
            reduction_pct,
            "compression complete"
        );

        Ok(CompressionReport {
            original_text: text.to_string(),
            compressed_text,
            model: self.model.clone(),
            original_tokens: reduction.original_tokens,
            compressed_tokens: reduction.compressed_tokens,
            reduction_pct,
        })
    }
}
