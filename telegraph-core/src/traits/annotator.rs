use crate::annotation::Sentence;
use crate::errors::TelegraphResult;

/// Annotation capability: raw text in, annotated sentences out.
///
/// Sentence segmentation, tagging, and lemmatization are entirely the
/// annotator's responsibility. Consumers treat the output as ground truth
/// and never second-guess a tag.
pub trait IAnnotator: Send + Sync {
    /// Split `text` into sentences of annotated tokens.
    fn annotate(&self, text: &str) -> TelegraphResult<Vec<Sentence>>;
}
