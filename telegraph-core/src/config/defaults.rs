//! Default configuration values.
//!
//! Single source of truth: `Default` impls and config structs read from
//! here, never from literals scattered through the code.

use crate::annotation::PosTag;

/// Part-of-speech categories dropped by default. These are the closed-class,
/// grammatically predictable categories a reader can reconstruct.
pub const DEFAULT_DROP_POS: [PosTag; 7] = [
    PosTag::Det,
    PosTag::Adp,
    PosTag::Aux,
    PosTag::Pron,
    PosTag::Cconj,
    PosTag::Sconj,
    PosTag::Part,
];

/// Surface forms dropped by default regardless of category. Matched
/// case-insensitively against the token's surface text, not its lemma.
pub const DEFAULT_DROP_SURFACE: [&str; 5] = ["like", "just", "really", "basically", "literally"];

/// Model identifier whose tokenization scheme measures the reduction.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Capacity of the per-text token count cache.
pub const DEFAULT_COUNT_CACHE_CAPACITY: u64 = 10_000;

/// Tracing filter applied when `TELEGRAPH_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";
