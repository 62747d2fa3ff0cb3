//! HTTP/2 HEADERS frame assembly.
//!
//! Entries are encoded first; the 9-byte frame header is computed from their
//! total length and placed ahead of them.
//!
//! Reference: RFC 7540 Section 4.1 (frame format), Section 6.2 (HEADERS)

use crate::error::{FrameGenError, Result};
use crate::hpack::{Compression, HeaderEntry};

/// HTTP/2 frame types (RFC 7540 Section 6)
pub mod frame_type {
    pub const HEADERS: u8 = 0x1;
}

/// HTTP/2 frame flags
pub mod flags {
    pub const END_STREAM: u8 = 0x1;
    pub const END_HEADERS: u8 = 0x4;
}

/// Size of the fixed frame header.
pub const FRAME_HEADER_LEN: usize = 9;

/// Largest payload the 24-bit length field can describe.
pub const MAX_FRAME_PAYLOAD: usize = 0xFF_FFFF;

/// Fixtures always describe the first client-initiated stream.
pub const FIXTURE_STREAM_ID: u32 = 1;

/// An HTTP/2 frame header (9 bytes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub length: u32,      // 24 bits
    pub frame_type: u8,
    pub flags: u8,
    pub stream_id: u32,   // 31 bits (high bit reserved)
}

impl FrameHeader {
    /// Header for a HEADERS frame carrying a complete header block.
    pub fn headers(length: u32, end_stream: bool) -> Self {
        let mut flags_byte = flags::END_HEADERS;
        if end_stream {
            flags_byte |= flags::END_STREAM;
        }
        Self {
            length,
            frame_type: frame_type::HEADERS,
            flags: flags_byte,
            stream_id: FIXTURE_STREAM_ID,
        }
    }

    /// Parse a 9-byte frame header
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < FRAME_HEADER_LEN {
            return None;
        }

        let length = ((data[0] as u32) << 16) | ((data[1] as u32) << 8) | (data[2] as u32);
        let stream_id = u32::from_be_bytes([data[5], data[6], data[7], data[8]]) & 0x7FFFFFFF;

        Some(Self {
            length,
            frame_type: data[3],
            flags: data[4],
            stream_id,
        })
    }

    /// Serialize to wire order.
    pub fn to_bytes(&self) -> [u8; FRAME_HEADER_LEN] {
        let stream_id = self.stream_id & 0x7FFFFFFF;
        [
            (self.length >> 16) as u8,
            (self.length >> 8) as u8,
            self.length as u8,
            self.frame_type,
            self.flags,
            (stream_id >> 24) as u8,
            (stream_id >> 16) as u8,
            (stream_id >> 8) as u8,
            stream_id as u8,
        ]
    }

    /// Check if END_STREAM flag is set
    pub fn is_end_stream(&self) -> bool {
        self.flags & flags::END_STREAM != 0
    }

    /// Check if END_HEADERS flag is set
    pub fn is_end_headers(&self) -> bool {
        self.flags & flags::END_HEADERS != 0
    }
}

/// Knobs for a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOptions {
    pub compression: Compression,
    /// Prepend the 9-byte frame header.
    pub framing: bool,
    /// Set END_STREAM on the frame header. Ignored without framing.
    pub end_stream: bool,
}

impl FrameOptions {
    pub fn new(compression: Compression) -> Self {
        Self {
            compression,
            framing: true,
            end_stream: false,
        }
    }
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self::new(Compression::default())
    }
}

/// A built fixture: optional frame header followed by one encoding per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFrame {
    pub header: Option<FrameHeader>,
    pub entries: Vec<Vec<u8>>,
}

impl HeaderFrame {
    /// Encode `headers` and, if requested, wrap them in a frame header.
    pub fn build(headers: &[HeaderEntry], options: &FrameOptions) -> Result<Self> {
        let count = headers.len();
        let entries = headers
            .iter()
            .enumerate()
            .map(|(n, entry)| -> Result<Vec<u8>> {
                let bytes = options.compression.encode(entry, n, count)?;
                tracing::debug!(n, key = %entry.key, len = bytes.len(), "encoded entry");
                Ok(bytes)
            })
            .collect::<Result<Vec<_>>>()?;

        let payload_len: usize = entries.iter().map(Vec::len).sum();
        if payload_len > MAX_FRAME_PAYLOAD {
            return Err(FrameGenError::FrameTooLarge {
                len: payload_len,
                max: MAX_FRAME_PAYLOAD,
            });
        }

        let header = options
            .framing
            .then(|| FrameHeader::headers(payload_len as u32, options.end_stream));

        tracing::info!(
            entries = count,
            payload_len,
            framed = header.is_some(),
            compression = ?options.compression,
            "built header block"
        );

        Ok(Self { header, entries })
    }

    /// Output lines in order: the frame header (if any), then each entry.
    pub fn lines(&self) -> Vec<Vec<u8>> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        if let Some(header) = &self.header {
            lines.push(header.to_bytes().to_vec());
        }
        lines.extend(self.entries.iter().cloned());
        lines
    }

    /// The HPACK header block alone.
    pub fn header_block(&self) -> Vec<u8> {
        self.entries.concat()
    }

    /// Everything, flattened.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines().concat()
    }

    pub fn payload_len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }
}
