//! Log truncation
//!
//! Search responses carry up to thousands of message bodies; only a prefix
//! of them goes into debug/error logs.

/// Maximum number of characters kept in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for logging.
///
/// Returns the original string if it has at most `TRUNCATE_LIMIT` characters,
/// otherwise the first `TRUNCATE_LIMIT` characters followed by the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
