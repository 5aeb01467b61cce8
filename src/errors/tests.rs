//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use std::path::Path;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownLanguage {
            language: "cobol".to_string(),
        },
        Some("report.cbl".to_string()),
    );

    assert_eq!(error.get_error_name(), "UnknownLanguage");
    assert_eq!(error.get_file(), Some("report.cbl"));
}

#[test]
fn test_io_error_from_std() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error = Error::io(Path::new("missing.sql"), &io_error);

    assert_eq!(error.get_error_name(), "IOError");
    assert_eq!(error.get_file(), Some("missing.sql"));
    match error.get_impl() {
        ErrorImpl::IoError { path, reason } => {
            assert_eq!(path, "missing.sql");
            assert!(reason.contains("no such file"));
        }
        other => panic!("expected IoError, got {:?}", other),
    }
}

#[test]
fn test_error_names() {
    let cases = vec![
        (ErrorImpl::LexError { reason: "x".to_string() }, "LexError"),
        (
            ErrorImpl::InvalidPattern {
                language: "sql".to_string(),
                pattern: "(".to_string(),
                reason: "unclosed group".to_string(),
            },
            "InvalidPattern",
        ),
        (ErrorImpl::EmptyGrammar { language: "sql".to_string() }, "EmptyGrammar"),
        (ErrorImpl::WorkerPool { reason: "x".to_string() }, "WorkerPool"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, None).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnknownLanguage {
            language: "cobol".to_string(),
        },
        None,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("cobol")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_missing_extension_tip() {
    let error = Error::new(
        ErrorImpl::UnknownLanguage {
            language: String::new(),
        },
        Some("Makefile".to_string()),
    );

    assert!(error.get_tip().to_string().contains("no extension"));
}

#[test]
fn test_lex_error_has_no_tip() {
    let error = Error::new(ErrorImpl::LexError { reason: "unused".to_string() }, None);

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::IoError {
            path: "a.vbs".to_string(),
            reason: "permission denied".to_string(),
        },
        Some("a.vbs".to_string()),
    );

    let rendered = error.to_string();
    assert!(rendered.starts_with("IOError (a.vbs)"));
    assert!(rendered.contains("permission denied"));

    let error = Error::new(ErrorImpl::EmptyGrammar { language: "basic".to_string() }, None);
    assert_eq!(error.to_string(), "EmptyGrammar: grammar \"basic\" has no rules");
}
