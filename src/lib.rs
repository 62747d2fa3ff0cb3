//! h2-header-frame-gen: HPACK header block fixtures for HTTP/2 tests
//!
//! Turns a hand-written list of `key: value` headers into the exact bytes of
//! an HTTP/2 HEADERS frame, then prints them as C string literals or as a hex
//! array ready to paste into a test.
//!
//! # Quick Start
//!
//! ```rust
//! use h2_header_frame_gen::{parse_headers, render, Compression, FrameOptions, HeaderFrame, OutputMode};
//!
//! let headers = parse_headers(":path: /foo/bar\ncontent-type: application/grpc\n").unwrap();
//! let frame = HeaderFrame::build(&headers, &FrameOptions::new(Compression::Never)).unwrap();
//!
//! for line in render(&frame, OutputMode::Hex) {
//!     println!("{}", line);
//! }
//! ```
//!
//! # Encodings
//!
//! - `Never`: literal never indexed, new name (`0x10`)
//! - `Inc`: literal with incremental indexing, new name (`0x40`)
//! - `Pre`: one-byte indexed reference, numbered from the end of the table
//!
//! Strings are never Huffman coded and keys/values are capped at 126 bytes so
//! every length fits a single prefix byte.

pub mod error;
pub mod frame;
pub mod hpack;
pub mod input;
pub mod render;
pub mod verify;

pub use error::{Field, FrameGenError, Result};

pub use frame::{
    FrameHeader, FrameOptions, HeaderFrame,
    FIXTURE_STREAM_ID, FRAME_HEADER_LEN, MAX_FRAME_PAYLOAD,
    flags, frame_type,
};

pub use hpack::{Compression, HeaderEntry, HpackDecoder, MAX_LITERAL_LEN, STATIC_TABLE_LEN};
pub use input::parse_headers;
pub use render::{escape_c, hex_array, render, OutputMode};
pub use verify::{verify, Verified};
