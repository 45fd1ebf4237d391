use serde::{Deserialize, Serialize};

use crate::constants::{CHUNK_SEPARATOR, TERMINATOR};

/// Ordered per-sentence chunks of a compressed text.
///
/// Each chunk is the space-joined retained lemmas of one sentence, in
/// sentence order. A sentence that retained nothing contributes no chunk,
/// so no stored chunk is ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedText {
    chunks: Vec<String>,
}

impl CompressedText {
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Append a chunk. An empty chunk is ignored: a fully filtered sentence
    /// contributes nothing, not an empty segment.
    pub fn push(&mut self, chunk: String) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Render to the final compressed string: chunks joined by `". "` with a
    /// single trailing `"."`. Zero chunks render as exactly `"."`.
    pub fn render(&self) -> String {
        let mut rendered = self.chunks.join(CHUNK_SEPARATOR);
        rendered.push_str(TERMINATOR);
        rendered
    }
}

impl FromIterator<String> for CompressedText {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut text = Self::new();
        for chunk in iter {
            text.push(chunk);
        }
        text
    }
}
