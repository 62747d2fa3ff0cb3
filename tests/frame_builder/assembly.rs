//! Tests for building complete fixtures

use h2_header_frame_gen::{
    parse_headers, Compression, FrameGenError, FrameOptions, HeaderEntry, HeaderFrame,
    FRAME_HEADER_LEN,
};

const GRPC_REQUEST: &str = "\
:path: /foo/bar
content-type: application/grpc
";

#[test]
fn test_grpc_request_unframed_never() {
    let headers = parse_headers(GRPC_REQUEST).unwrap();
    let options = FrameOptions {
        framing: false,
        ..FrameOptions::new(Compression::Never)
    };
    let frame = HeaderFrame::build(&headers, &options).unwrap();

    let mut first = vec![0x10, 0x05];
    first.extend_from_slice(b":path");
    first.push(0x08);
    first.extend_from_slice(b"/foo/bar");

    let mut second = vec![0x10, 0x0c];
    second.extend_from_slice(b"content-type");
    second.push(0x10);
    second.extend_from_slice(b"application/grpc");

    assert_eq!(frame.lines(), vec![first, second]);
}

#[test]
fn test_grpc_request_framed_end_stream() {
    let headers = parse_headers(GRPC_REQUEST).unwrap();
    let options = FrameOptions {
        end_stream: true,
        ..FrameOptions::new(Compression::Inc)
    };
    let frame = HeaderFrame::build(&headers, &options).unwrap();
    let bytes = frame.to_bytes();

    let payload_len = (3 + 5 + 8) + (3 + 12 + 16);
    assert_eq!(&bytes[..FRAME_HEADER_LEN], &[0, 0, payload_len as u8, 1, 5, 0, 0, 0, 1]);
    assert_eq!(bytes[FRAME_HEADER_LEN], 0x40);
    assert_eq!(bytes.len(), FRAME_HEADER_LEN + payload_len);
}

#[test]
fn test_framed_line_count() {
    let headers = vec![HeaderEntry::new("a", "b"); 4];
    let framed = HeaderFrame::build(&headers, &FrameOptions::new(Compression::Never)).unwrap();
    assert_eq!(framed.lines().len(), 5);

    let unframed = HeaderFrame::build(
        &headers,
        &FrameOptions {
            framing: false,
            ..FrameOptions::new(Compression::Never)
        },
    )
    .unwrap();
    assert_eq!(unframed.lines().len(), 4);
}

#[test]
fn test_pre_indexed_frame() {
    let headers = vec![HeaderEntry::new("a", "b"); 3];
    let frame = HeaderFrame::build(&headers, &FrameOptions::new(Compression::Pre)).unwrap();
    assert_eq!(
        frame.to_bytes(),
        vec![0, 0, 3, 1, 4, 0, 0, 0, 1, 0xC0, 0xBF, 0xBE]
    );
}

#[test]
fn test_pre_indexed_too_many_entries() {
    let headers = vec![HeaderEntry::new("a", "b"); 67];
    let result = HeaderFrame::build(&headers, &FrameOptions::new(Compression::Pre));
    assert_eq!(result, Err(FrameGenError::IndexOutOfRange { index: 128 }));
}

#[test]
fn test_pre_indexed_sixty_six_entries_fill_the_byte() {
    let headers = vec![HeaderEntry::new("a", "b"); 66];
    let options = FrameOptions {
        framing: false,
        ..FrameOptions::new(Compression::Pre)
    };
    let block = HeaderFrame::build(&headers, &options).unwrap().header_block();

    assert_eq!(block.len(), 66);
    assert_eq!(block[0], 0xFF);
    assert_eq!(block[65], 0xBE);
}

#[test]
fn test_oversized_key_aborts_build() {
    let headers = vec![
        HeaderEntry::new(":method", "GET"),
        HeaderEntry::new("x".repeat(200), "v"),
    ];
    for framing in [true, false] {
        let options = FrameOptions {
            framing,
            ..FrameOptions::new(Compression::Never)
        };
        assert!(matches!(
            HeaderFrame::build(&headers, &options),
            Err(FrameGenError::OversizedField { len: 200, .. })
        ));
    }
}

#[test]
fn test_default_options_are_framed_never_indexed() {
    let options = FrameOptions::default();
    assert_eq!(options.compression, Compression::Never);
    assert!(options.framing);
    assert!(!options.end_stream);
}
