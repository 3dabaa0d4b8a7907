//! Tests for vCard parse errors.

use super::error::{ParseError, ParseErrorKind};
use super::parse;

#[test]
fn error_new() {
    let err = ParseError::new(ParseErrorKind::UnexpectedEof, 5, "test message");
    assert_eq!(err.line, 5);
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err.message, "test message");
}

#[test]
fn error_unexpected() {
    let err = ParseError::unexpected(10, "BEGIN:VCARD", "END:VCARD");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert!(err.message.contains("expected BEGIN:VCARD"));
    assert!(err.message.contains("found END:VCARD"));
}

#[test]
fn error_display() {
    let err = ParseError::new(ParseErrorKind::UnsupportedVersion, 2, "5.0");
    let displayed = format!("{err}");
    assert!(displayed.contains("line 2"));
    assert!(displayed.contains("unsupported version"));
    assert!(displayed.contains("5.0"));
}

#[test]
fn unclosed_card() {
    let err = parse("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane\r\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err.line, 1);
}

#[test]
fn missing_colon() {
    let err = parse("BEGIN:VCARD\nVERSION:3.0\nFN Jane\nEND:VCARD\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
    assert_eq!(err.line, 3);
}

#[test]
fn stray_end() {
    let err = parse("END:VCARD\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
}

#[test]
fn unsupported_version() {
    let err = parse("BEGIN:VCARD\nVERSION:9.9\nEND:VCARD\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnsupportedVersion);
    assert_eq!(err.line, 2);
}

#[test]
fn empty_parameter_name() {
    let err = parse("BEGIN:VCARD\nTEL;;CELL:1\nEND:VCARD\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidParameter);
}
