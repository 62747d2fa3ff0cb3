//! Tests for reading header lists

use h2_header_frame_gen::{parse_headers, FrameGenError, HeaderEntry};

#[test]
fn test_parse_fixture_file() {
    let input = "\
# unary call
:scheme: http
:method: POST
:authority: localhost:50051

:path: /grpc.testing.TestService/UnaryCall
content-type: application/grpc
te: trailers
";
    let headers = parse_headers(input).unwrap();
    assert_eq!(
        headers,
        vec![
            HeaderEntry::new(":scheme", "http"),
            HeaderEntry::new(":method", "POST"),
            HeaderEntry::new(":authority", "localhost:50051"),
            HeaderEntry::new(":path", "/grpc.testing.TestService/UnaryCall"),
            HeaderEntry::new("content-type", "application/grpc"),
            HeaderEntry::new("te", "trailers"),
        ]
    );
}

#[test]
fn test_crlf_lines() {
    let headers = parse_headers(":status: 200\r\ngrpc-status: 0\r\n").unwrap();
    assert_eq!(headers[1], HeaderEntry::new("grpc-status", "0"));
}

#[test]
fn test_empty_input() {
    assert!(parse_headers("").unwrap().is_empty());
    assert!(parse_headers("\n# only comments\n\n").unwrap().is_empty());
}

#[test]
fn test_malformed_line() {
    let err = parse_headers(":status: 200\nbroken line\n").unwrap_err();
    assert!(matches!(err, FrameGenError::MalformedInputLine { line: 2, .. }));
}
