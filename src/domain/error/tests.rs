//! Regression coverage for error classification.

use super::*;
use rstest::rstest;

#[rstest]
fn missing_field_carries_the_fixed_message() {
    let err = Error::missing_field();
    assert_eq!(err.kind(), ErrorKind::MissingField);
    assert!(err.message().starts_with("Phonebook data insertion failed"));
}

#[rstest]
fn malformed_id_uses_the_wire_message() {
    let err = Error::malformed_id();
    assert_eq!(err.kind(), ErrorKind::MalformedId);
    assert_eq!(err.message(), "malformatted id");
}

#[rstest]
fn unknown_endpoint_uses_the_wire_message() {
    let err = Error::unknown_endpoint();
    assert_eq!(err.kind(), ErrorKind::UnknownEndpoint);
    assert_eq!(err.message(), "unknown endpoint");
}

#[rstest]
#[case(PersonValidationError::MissingName)]
#[case(PersonValidationError::MissingNumber)]
fn validation_failures_classify_as_missing_field(#[case] source: PersonValidationError) {
    let err = Error::from(source);
    assert_eq!(err.kind(), ErrorKind::MissingField);
}

#[rstest]
fn constraint_failures_classify_as_record_invalid_and_echo_the_message() {
    let source = PersonRepositoryError::constraint("name must not be empty");
    let err = Error::from(source);
    assert_eq!(err.kind(), ErrorKind::RecordInvalid);
    assert_eq!(err.message(), "name must not be empty");
}

#[rstest]
fn connection_failures_classify_as_unhandled() {
    let err = Error::from(PersonRepositoryError::connection("connection refused"));
    assert_eq!(err.kind(), ErrorKind::Unhandled);
    assert!(err.message().contains("connection refused"));
}

#[rstest]
fn query_failures_classify_as_unhandled() {
    let err = Error::from(PersonRepositoryError::query("database error"));
    assert_eq!(err.kind(), ErrorKind::Unhandled);
}
