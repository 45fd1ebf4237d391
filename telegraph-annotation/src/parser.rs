use std::path::Path;

use telegraph_core::errors::{AnnotationError, TelegraphResult};

use crate::document::AnnotatedDocument;

/// Parser for annotated-document JSON.
pub struct DocumentParser;

impl DocumentParser {
    /// Parse an annotated document from a JSON string.
    pub fn parse_str(input: &str) -> TelegraphResult<AnnotatedDocument> {
        serde_json::from_str(input).map_err(|e| {
            AnnotationError::InvalidDocument {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Parse an annotated document from a JSON file.
    pub fn parse_file(path: impl AsRef<Path>) -> TelegraphResult<AnnotatedDocument> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_str(&content)
    }
}
