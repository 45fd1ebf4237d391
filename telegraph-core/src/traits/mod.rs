//! Capability traits at the system's seams.
//!
//! The external collaborators (annotation, token counting) and the filter
//! itself sit behind these, so the pipeline composes trait objects and
//! tests substitute mocks.

pub mod annotator;
pub mod compressor;
pub mod token_counter;

pub use annotator::IAnnotator;
pub use compressor::ICompressor;
pub use token_counter::ITokenCounter;
