//! Result models shared across the telegraph crates.

pub mod compressed_text;
pub mod report;

pub use compressed_text::CompressedText;
pub use report::CompressionReport;
