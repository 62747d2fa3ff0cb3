//! Textual renderings of a built frame.

use crate::frame::HeaderFrame;

/// How the fixture is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One quoted, escaped C string literal per line.
    #[default]
    CString,
    /// A single `{0x.., 0x..}` array.
    Hex,
}

/// Render the frame as output lines (without trailing newlines).
pub fn render(frame: &HeaderFrame, mode: OutputMode) -> Vec<String> {
    match mode {
        OutputMode::Hex => vec![hex_array(&frame.to_bytes())],
        OutputMode::CString => frame.lines().iter().map(|line| escape_c(line)).collect(),
    }
}

/// Format bytes as a brace-delimited C array initializer.
pub fn hex_array(bytes: &[u8]) -> String {
    let body = bytes
        .iter()
        .map(|b| format!("0x{:02x}", b))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// Quote `bytes` as a C string literal.
///
/// Printable ASCII passes through (with `"` escaped); everything else
/// becomes `\xHH`. C hex escapes are greedy, so a hex-digit character right
/// after an escape is split into a new adjacent literal with `""`.
pub fn escape_c(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 2);
    out.push('"');
    let mut after_escape = false;
    for &b in bytes {
        if (32..127).contains(&b) {
            if after_escape && b.is_ascii_hexdigit() {
                out.push_str("\"\"");
            }
            if b == b'"' {
                out.push_str("\\\"");
            } else {
                out.push(b as char);
            }
            after_escape = false;
        } else {
            out.push_str(&format!("\\x{:02x}", b));
            after_escape = true;
        }
    }
    out.push('"');
    out
}
