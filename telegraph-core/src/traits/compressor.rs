use crate::annotation::Sentence;
use crate::errors::TelegraphResult;
use crate::models::CompressedText;
use crate::policy::RemovalPolicy;

/// Telegraphic compression capability.
pub trait ICompressor: Send + Sync {
    /// Filter annotated sentences under the given removal policy, producing
    /// one chunk per sentence that retained anything.
    fn compress(
        &self,
        sentences: &[Sentence],
        policy: &RemovalPolicy,
    ) -> TelegraphResult<CompressedText>;
}
