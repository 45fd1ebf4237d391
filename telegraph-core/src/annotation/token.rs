use serde::{Deserialize, Serialize};

use super::pos_tag::PosTag;

/// A single annotated word or punctuation unit within a sentence.
///
/// Produced by the annotation capability; immutable once built. The filter
/// consumes the coarse tag, the lowercased surface text, and the punctuation
/// flag to decide retention, and emits the lemma when it retains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text exactly as it appeared in the input.
    pub text: String,
    /// Dictionary base form ("built" → "build").
    pub lemma: String,
    /// Coarse part-of-speech category.
    pub pos: PosTag,
    /// Whether the annotator flagged this token as punctuation.
    pub is_punct: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_punct: pos == PosTag::Punct,
        }
    }
}

/// An ordered sequence of annotated tokens. Sentence boundary detection is
/// the annotator's responsibility; this type never re-segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl From<Vec<Token>> for Sentence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
