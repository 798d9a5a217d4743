/// Unit tests for PatternError and PatternResult types

use gof_creational::{PatternError, PatternResult};
use std::error::Error;

#[test]
fn test_error_display_invalid_argument() {
    let error = PatternError::InvalidArgument("ship name required.");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Invalid argument: ship name required.");
    assert!(display_str.contains("ship name required."));
}

#[test]
fn test_error_display_illegal_construction() {
    let error = PatternError::IllegalConstruction("Cannot reflectively create enum objects");
    assert_eq!(
        error.to_string(),
        "Illegal construction: Cannot reflectively create enum objects"
    );
}

#[test]
fn test_error_display_illegal_access() {
    let error = PatternError::IllegalAccess("constructor is not accessible");
    assert_eq!(error.to_string(), "Illegal access: constructor is not accessible");
    assert_ne!(error, PatternError::IllegalConstruction("constructor is not accessible"));
}

#[test]
fn test_error_display_serialization_and_io() {
    assert_eq!(
        PatternError::Serialization("expected value".to_string()).to_string(),
        "Serialization failed: expected value"
    );
    assert_eq!(PatternError::Io("broken pipe".to_string()).to_string(), "I/O failed: broken pipe");
}

#[test]
fn test_error_display_bean_errors() {
    assert_eq!(PatternError::BeanNotFound("hello".to_string()).to_string(), "Bean not found: hello");
    assert_eq!(
        PatternError::BeanTypeMismatch("alloc::string::String").to_string(),
        "Bean type mismatch for: alloc::string::String"
    );
}

#[test]
fn test_serde_json_error_conversion() {
    let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
    assert!(matches!(PatternError::from(parse_err), PatternError::Serialization(_)));

    struct FailingWriter;
    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let io_err = serde_json::to_writer(FailingWriter, &42u32).unwrap_err();
    assert!(matches!(PatternError::from(io_err), PatternError::Io(_)));
}

#[test]
fn test_pattern_result_err() {
    let result: PatternResult<String> = Err(PatternError::InvalidArgument("contact required."));

    match result {
        Err(PatternError::InvalidArgument(msg)) => assert_eq!(msg, "contact required."),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_error_as_std_error() {
    let error = PatternError::BeanNotFound("ship".to_string());
    let _: &dyn std::error::Error = &error;
    assert!(error.source().is_none());
}

#[test]
fn test_error_clone_eq() {
    let error = PatternError::IllegalConstruction("closed");
    assert_eq!(error.clone(), error);
}
