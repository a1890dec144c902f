//! Keyword list parsing.

/// Splits comma-separated input into an ordered keyword list.
///
/// No escaping, no trimming, no deduplication: `"a, b"` yields `" b"` with
/// its leading space, and `"a,,b"` yields an empty keyword that matches
/// every line. Whatever the user typed is what gets searched.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}
