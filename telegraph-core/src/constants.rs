/// Telegraph system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator inserted between compressed sentence chunks.
pub const CHUNK_SEPARATOR: &str = ". ";

/// Terminator appended to every compressed output, even an empty one.
pub const TERMINATOR: &str = ".";
