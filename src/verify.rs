//! Post-build self check.
//!
//! Re-reads a built frame the way a receiver would: the frame header is
//! parsed back and compared with the payload, and literal header blocks are
//! decoded with `fluke-hpack` and compared with the input list.

use crate::error::{FrameGenError, Result};
use crate::frame::{frame_type, FrameHeader, HeaderFrame, FIXTURE_STREAM_ID, FRAME_HEADER_LEN};
use crate::hpack::{Compression, HeaderEntry, HpackDecoder};

/// Outcome of a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verified {
    /// Frame header and decoded entries both matched.
    Decoded,
    /// The block references an external table; only framing was checked.
    FramingOnly,
}

/// Check `frame` against `headers`: `Decoded` when the block decoded back to
/// the input, `FramingOnly` when only the frame header could be checked.
pub fn verify(
    frame: &HeaderFrame,
    headers: &[HeaderEntry],
    compression: Compression,
) -> Result<Verified> {
    let bytes = frame.to_bytes();
    let block = match &frame.header {
        Some(expected) => {
            let parsed = FrameHeader::parse(&bytes).ok_or_else(|| {
                FrameGenError::Verification("frame shorter than its header".to_string())
            })?;
            check_header(&parsed, expected, bytes.len() - FRAME_HEADER_LEN)?;
            &bytes[FRAME_HEADER_LEN..]
        }
        None => &bytes[..],
    };

    if !compression.is_self_describing() {
        tracing::warn!(?compression, "header block is not self-describing, skipping decode");
        return Ok(Verified::FramingOnly);
    }

    let decoded = HpackDecoder::new().decode(block)?;
    if decoded.len() != headers.len() {
        return Err(FrameGenError::Verification(format!(
            "decoded {} entries, expected {}",
            decoded.len(),
            headers.len()
        )));
    }
    for (n, (got, want)) in decoded.iter().zip(headers).enumerate() {
        if got != want {
            return Err(FrameGenError::Verification(format!(
                "entry {}: decoded {:?}, expected {:?}",
                n, got, want
            )));
        }
    }

    tracing::info!(entries = decoded.len(), "header block verified");
    Ok(Verified::Decoded)
}

fn check_header(parsed: &FrameHeader, expected: &FrameHeader, payload_len: usize) -> Result<()> {
    if parsed != expected {
        return Err(FrameGenError::Verification(format!(
            "frame header reads back as {:?}, built {:?}",
            parsed, expected
        )));
    }
    if parsed.length as usize != payload_len {
        return Err(FrameGenError::Verification(format!(
            "frame length {} but payload is {} bytes",
            parsed.length, payload_len
        )));
    }
    if parsed.frame_type != frame_type::HEADERS
        || !parsed.is_end_headers()
        || parsed.stream_id != FIXTURE_STREAM_ID
    {
        return Err(FrameGenError::Verification(format!(
            "not a complete HEADERS frame on stream {}: {:?}",
            FIXTURE_STREAM_ID, parsed
        )));
    }
    Ok(())
}
