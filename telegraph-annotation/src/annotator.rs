use tracing::debug;

use telegraph_core::annotation::Sentence;
use telegraph_core::errors::{AnnotationError, TelegraphResult};
use telegraph_core::traits::IAnnotator;

use crate::document::AnnotatedDocument;

/// An `IAnnotator` backed by one pre-annotated document.
///
/// Annotation is scoped to exactly the text it was produced from. A request
/// for any other text is a contract violation, never a best-effort answer,
/// so the input is compared byte for byte before sentences are handed out.
pub struct DocumentAnnotator {
    document: AnnotatedDocument,
}

impl DocumentAnnotator {
    pub fn new(document: AnnotatedDocument) -> Self {
        Self { document }
    }

    /// The raw text this annotator covers.
    pub fn text(&self) -> &str {
        &self.document.text
    }
}

impl IAnnotator for DocumentAnnotator {
    fn annotate(&self, text: &str) -> TelegraphResult<Vec<Sentence>> {
        if text != self.document.text {
            return Err(AnnotationError::TextMismatch {
                expected_len: self.document.text.len(),
                actual_len: text.len(),
            }
            .into());
        }

        let sentences = self.document.to_sentences()?;
        debug!(sentences = sentences.len(), "annotated document resolved");
        Ok(sentences)
    }
}
