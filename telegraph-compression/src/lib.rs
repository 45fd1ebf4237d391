//! # telegraph-compression
//!
//! Telegraphic semantic compression: drop the grammatically predictable
//! tokens (determiners, adpositions, auxiliaries, pronouns, conjunctions,
//! particles) and low-information fillers, keep the content words as
//! lemmas. The pipeline composes the annotation and counting capabilities
//! into a before/after report measured in real model tokens.

pub mod engine;
pub mod filter;
pub mod pipeline;

pub use engine::CompressionEngine;
pub use pipeline::CompressionPipeline;
