use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech category assigned to a token by the annotator.
///
/// Covers the 17 Universal POS tags plus `SPACE`, which spaCy-style
/// annotators emit for bare whitespace tokens. The wire form is the
/// upper-case label (`"PROPN"`, `"CCONJ"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Adjective.
    Adj,
    /// Adposition (preposition or postposition).
    Adp,
    /// Adverb.
    Adv,
    /// Auxiliary verb.
    Aux,
    /// Coordinating conjunction.
    Cconj,
    /// Determiner.
    Det,
    /// Interjection.
    Intj,
    /// Noun.
    Noun,
    /// Numeral.
    Num,
    /// Particle.
    Part,
    /// Pronoun.
    Pron,
    /// Proper noun.
    Propn,
    /// Punctuation.
    Punct,
    /// Subordinating conjunction.
    Sconj,
    /// Symbol.
    Sym,
    /// Verb.
    Verb,
    /// Other / unanalyzable.
    X,
    /// Bare whitespace token.
    Space,
}

impl PosTag {
    /// All tags, in label order.
    pub const ALL: [PosTag; 18] = [
        Self::Adj,
        Self::Adp,
        Self::Adv,
        Self::Aux,
        Self::Cconj,
        Self::Det,
        Self::Intj,
        Self::Noun,
        Self::Num,
        Self::Part,
        Self::Pron,
        Self::Propn,
        Self::Punct,
        Self::Sconj,
        Self::Sym,
        Self::Verb,
        Self::X,
        Self::Space,
    ];

    /// The upper-case wire label for this tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
            Self::Space => "SPACE",
        }
    }

    /// Parse a wire label. Returns `None` for anything outside the tag set;
    /// the annotation boundary turns that into a contract-violation error.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.label() == label)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
