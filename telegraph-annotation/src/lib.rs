//! # telegraph-annotation
//!
//! The annotation capability boundary. No linguistic analysis happens here:
//! sentence segmentation, tagging, and lemmatization belong to an external
//! annotator, and this crate consumes its output contract as JSON
//! documents, validating them into core sentences.

pub mod annotator;
pub mod document;
pub mod parser;

pub use annotator::DocumentAnnotator;
pub use document::{AnnotatedDocument, AnnotatedSentence, AnnotatedToken};
pub use parser::DocumentParser;
