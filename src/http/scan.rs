//! Bounded byte-sequence search.
//!
//! The parser delimits a request by locating `\r\n` and `\r\n\r\n` inside
//! its look-ahead buffer. The search is byte-wise and windowed: only
//! `[start, limit)` of the haystack is considered, so the same buffer can be
//! scanned for the request line first and the header block after it.

/// Find the first occurrence of `needle` in `haystack[start..limit]`.
///
/// Returns the index relative to the start of `haystack`, or `None` if the
/// needle does not occur entirely inside the window. `limit` is clamped to
/// the haystack length, so callers can pass the number of valid bytes in a
/// larger buffer.
pub fn find(haystack: &[u8], needle: &[u8], start: usize, limit: usize) -> Option<usize> {
    let limit = limit.min(haystack.len());

    if needle.is_empty() || start >= limit {
        return None;
    }

    haystack[start..limit]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| i + start)
}
