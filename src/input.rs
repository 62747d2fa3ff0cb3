//! Line-oriented parsing of `key: value` header lists.
//!
//! ```text
//! # request headers
//! :path: /foo/bar
//! content-type: application/grpc
//! ```
//!
//! The first character of a line always belongs to the key, so pseudo-headers
//! such as `:path` split on the colon that follows the name rather than on
//! their leading marker.

use crate::error::{FrameGenError, Result};
use crate::hpack::HeaderEntry;

/// Parse a whole header list. Blank lines and `#` comments are skipped.
pub fn parse_headers(input: &str) -> Result<Vec<HeaderEntry>> {
    let mut entries = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        if let Some(entry) = parse_line(raw, idx + 1)? {
            entries.push(entry);
        }
    }
    tracing::debug!(count = entries.len(), "parsed header list");
    Ok(entries)
}

/// Parse one line. `line_no` is 1-based and only used for error reporting.
pub fn parse_line(raw: &str, line_no: usize) -> Result<Option<HeaderEntry>> {
    let line = raw.trim();
    let mut chars = line.chars();
    let marker = match chars.next() {
        None | Some('#') => return Ok(None),
        Some(c) => c,
    };

    let (key_tail, value) =
        chars
            .as_str()
            .split_once(':')
            .ok_or_else(|| FrameGenError::MalformedInputLine {
                line: line_no,
                text: line.to_string(),
            })?;

    let mut key = String::with_capacity(marker.len_utf8() + key_tail.len());
    key.push(marker);
    key.push_str(key_tail);

    Ok(Some(HeaderEntry::new(key.trim(), value.trim())))
}
