//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::ReadFailed {
            input: "missing.c".to_string(),
            reason: "No such file or directory".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "ReadFailed");
    assert!(matches!(error.get_error_impl(), ErrorImpl::ReadFailed { .. }));
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::InvalidEncoding {
            input: "test.c".to_string(),
        },
        Position(42, Rc::new("test.c".to_string())),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_error_name(), "InvalidEncoding");
}

#[test]
fn test_error_tips() {
    let read = Error::new(
        ErrorImpl::ReadFailed {
            input: "missing.c".to_string(),
            reason: "not found".to_string(),
        },
        Position::null(),
    );
    assert_eq!(
        read.get_tip().to_string(),
        "Could not read `missing.c`, does it exist?"
    );

    let encoding = Error::new(
        ErrorImpl::InvalidEncoding {
            input: "test.c".to_string(),
        },
        Position(7, Rc::new("test.c".to_string())),
    );
    assert_eq!(
        encoding.get_tip().to_string(),
        "Input is not valid UTF-8 at byte 7"
    );

    let write = Error::new(
        ErrorImpl::WriteFailed {
            reason: "broken pipe".to_string(),
        },
        Position::null(),
    );
    assert!(matches!(write.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::ReadFailed {
            input: "missing.c".to_string(),
            reason: "not found".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.to_string(), "failed to read \"missing.c\": not found");
}
