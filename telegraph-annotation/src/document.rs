use serde::{Deserialize, Serialize};

use telegraph_core::annotation::{PosTag, Sentence, Token};
use telegraph_core::errors::{AnnotationError, TelegraphResult};

/// An externally-annotated document: the annotation contract as data.
///
/// `pos` stays a plain string on the wire; conversion into core sentences
/// validates every tag, so malformed annotation never reaches the filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// The raw text this annotation describes, byte for byte.
    pub text: String,
    /// Sentences in document order. Segmentation is the annotator's call.
    pub sentences: Vec<AnnotatedSentence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    pub tokens: Vec<AnnotatedToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text exactly as it appeared.
    pub text: String,
    /// Dictionary base form.
    pub lemma: String,
    /// Coarse tag wire label (`"PROPN"`, `"DET"`, ...).
    pub pos: String,
    /// Punctuation flag.
    pub is_punct: bool,
}

impl AnnotatedDocument {
    /// Validate the wire form into core sentences.
    ///
    /// Every tag label must parse and the document must contain at least
    /// one sentence; either violation is an error, never a silent skip.
    pub fn to_sentences(&self) -> TelegraphResult<Vec<Sentence>> {
        if self.sentences.is_empty() {
            return Err(AnnotationError::EmptyDocument.into());
        }
        self.sentences
            .iter()
            .map(AnnotatedSentence::to_sentence)
            .collect()
    }
}

impl AnnotatedSentence {
    fn to_sentence(&self) -> TelegraphResult<Sentence> {
        let tokens = self
            .tokens
            .iter()
            .map(AnnotatedToken::to_token)
            .collect::<TelegraphResult<Vec<_>>>()?;
        Ok(Sentence::new(tokens))
    }
}

impl AnnotatedToken {
    fn to_token(&self) -> TelegraphResult<Token> {
        let pos = PosTag::from_label(&self.pos).ok_or_else(|| AnnotationError::UnknownTag {
            tag: self.pos.clone(),
        })?;
        Ok(Token {
            text: self.text.clone(),
            lemma: self.lemma.clone(),
            pos,
            is_punct: self.is_punct,
        })
    }
}
