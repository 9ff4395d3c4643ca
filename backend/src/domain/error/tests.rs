//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::invalid_credentials("nope"), ErrorCode::InvalidCredentials)]
#[case(Error::email_in_use("taken"), ErrorCode::EmailInUse)]
#[case(Error::position_not_found("gone"), ErrorCode::PositionNotFound)]
#[case(Error::duplicate_application("twice"), ErrorCode::DuplicateApplication)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_message() {
    let result = Error::try_new(ErrorCode::NotFound, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn new_substitutes_blank_message() {
    let err = Error::new(ErrorCode::NotFound, "");
    assert_eq!(err.message(), "unspecified error");
}

#[rstest]
fn serializes_code_in_snake_case() {
    let err = Error::duplicate_application("already applied");
    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(
        value,
        json!({ "code": "duplicate_application", "message": "already applied" })
    );
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::not_found("company 9 not found").to_string(), "company 9 not found");
}
