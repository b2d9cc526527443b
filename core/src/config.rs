//! Tuning constants for tokenization, snippets and ranking.

/// Tokens shorter than this many characters are dropped.
pub const MIN_TOKEN_LEN: usize = 3;

/// Content at or below this length is returned whole as its own snippet.
pub const SNIPPET_WIDTH: usize = 100;

/// How far before the first query-term match a snippet window starts.
pub const SNIPPET_LEAD: usize = 50;

/// Appended to every truncated snippet.
pub const SNIPPET_ELLIPSIS: &str = "...";

/// Result count used when the caller does not ask for one.
pub const DEFAULT_MAX_RESULTS: usize = 10;
