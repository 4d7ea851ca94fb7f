//! Log sanitization utilities
//!
//! Keeps large controller responses (a full `/proxies` dump easily runs into
//! hundreds of kilobytes) from flooding debug/error logs and error banners.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Maximum number of bytes of a response body shown in an error message.
const DISPLAY_LIMIT: usize = 120;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Truncate a response body for a one-line error message.
///
/// Line breaks are flattened so the result always fits on a single row.
pub fn truncate_for_display(s: &str) -> String {
    let flat: String = s
        .trim()
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.len() <= DISPLAY_LIMIT {
        flat
    } else {
        format!("{}...", &flat[..floor_char_boundary(&flat, DISPLAY_LIMIT)])
    }
}
