//! HPACK: Header Compression for HTTP/2 (RFC 7541)
//!
//! Hand-packs the three single-byte-prefix representations used for fixtures,
//! and wraps `fluke-hpack`'s decoder so generated blocks can be checked
//! against an independent implementation.

use crate::error::{Field, FrameGenError, Result};

/// Longest key or value a one-byte string length prefix can carry.
/// 127 would spill into a continuation byte (RFC 7541 Section 5.1).
pub const MAX_LITERAL_LEN: usize = 126;

/// Entries in the HPACK static table (RFC 7541 Appendix A).
pub const STATIC_TABLE_LEN: usize = 61;

/// Largest index that still packs into one byte after the `0x80` prefix.
pub const MAX_SINGLE_BYTE_INDEX: usize = 127;

/// Representation prefixes (RFC 7541 Section 6)
pub mod repr {
    pub const INDEXED: u8 = 0x80;
    pub const LITERAL_INCREMENTAL: u8 = 0x40;
    pub const LITERAL_NEVER_INDEXED: u8 = 0x10;
}

/// A header key/value pair, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// How each entry is represented in the header block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// Literal never indexed, new name (`0x10`).
    #[default]
    Never,
    /// Literal with incremental indexing, new name (`0x40`).
    Inc,
    /// Indexed reference into a table the decoder already holds.
    Pre,
}

impl Compression {
    /// Encode the entry at position `n` of a `count`-entry list.
    ///
    /// `Pre` numbers entries from the end of the table: the first entry
    /// gets `61 + count`, the last gets `62`. This matches a decoder that
    /// inserted the same list, in order, into its dynamic table.
    pub fn encode(self, entry: &HeaderEntry, n: usize, count: usize) -> Result<Vec<u8>> {
        match self {
            Compression::Never => encode_literal(repr::LITERAL_NEVER_INDEXED, entry),
            Compression::Inc => encode_literal(repr::LITERAL_INCREMENTAL, entry),
            Compression::Pre => {
                let index = STATIC_TABLE_LEN + count - n;
                if index > MAX_SINGLE_BYTE_INDEX {
                    return Err(FrameGenError::IndexOutOfRange { index });
                }
                Ok(vec![repr::INDEXED | index as u8])
            }
        }
    }

    /// True when the encoded block can be decoded without outside state.
    pub fn is_self_describing(self) -> bool {
        !matches!(self, Compression::Pre)
    }
}

fn encode_literal(prefix: u8, entry: &HeaderEntry) -> Result<Vec<u8>> {
    let key = checked_literal(Field::Key, &entry.key)?;
    let value = checked_literal(Field::Value, &entry.value)?;

    let mut out = Vec::with_capacity(3 + key.len() + value.len());
    out.push(prefix);
    // H bit is never set: strings are raw octets, not Huffman coded
    out.push(key.len() as u8);
    out.extend_from_slice(key);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    Ok(out)
}

fn checked_literal(field: Field, s: &str) -> Result<&[u8]> {
    let bytes = s.as_bytes();
    if bytes.len() > MAX_LITERAL_LEN {
        return Err(FrameGenError::OversizedField {
            field,
            len: bytes.len(),
            max: MAX_LITERAL_LEN,
        });
    }
    Ok(bytes)
}

/// HPACK decoder for generated header blocks.
/// Wraps `fluke_hpack::Decoder`, which keeps its own dynamic table.
pub struct HpackDecoder {
    inner: fluke_hpack::Decoder<'static>,
}

impl std::fmt::Debug for HpackDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HpackDecoder").finish()
    }
}

impl Default for HpackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HpackDecoder {
    pub fn new() -> Self {
        Self {
            inner: fluke_hpack::Decoder::new(),
        }
    }

    /// Decode an HPACK-encoded header block into entries.
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<HeaderEntry>> {
        let pairs = self
            .inner
            .decode(data)
            .map_err(|e| FrameGenError::Verification(format!("HPACK decode error: {:?}", e)))?;
        Ok(pairs
            .into_iter()
            .map(|(key, value)| {
                HeaderEntry::new(
                    String::from_utf8_lossy(&key).into_owned(),
                    String::from_utf8_lossy(&value).into_owned(),
                )
            })
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
