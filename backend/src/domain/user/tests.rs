//! Tests for student account validation and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn request() -> RegistrationRequest {
    RegistrationRequest {
        name: "Priya Sharma".to_owned(),
        email: "priya@example.com".to_owned(),
        roll_number: "CS2021042".to_owned(),
        branch: "Computer Science".to_owned(),
        year: 3,
        avatar: None,
    }
}

#[rstest]
#[case("john@example.com", true)]
#[case("first.last@uni.ac.in", true)]
#[case("john@localhost", false)]
#[case("john example@x.com", false)]
#[case("@example.com", false)]
#[case("a@@b.com", false)]
#[case("", false)]
fn email_validation(#[case] raw: &str, #[case] valid: bool) {
    assert_eq!(Email::new(raw).is_ok(), valid);
    assert_eq!(placement_fixtures::is_valid_email(raw), valid);
}

#[rstest]
fn name_length_is_bounded() {
    let long = "a".repeat(NAME_MAX + 1);
    assert_eq!(
        PersonName::new(long),
        Err(UserValidationError::NameTooLong { max: NAME_MAX })
    );
    assert!(PersonName::new("a".repeat(NAME_MAX)).is_ok());
}

#[rstest]
fn valid_request_builds_draft(request: RegistrationRequest) {
    let draft = NewUser::try_from(request).expect("valid draft");
    assert_eq!(draft.email().as_ref(), "priya@example.com");
}

#[rstest]
#[case::blank_name(|r: &mut RegistrationRequest| r.name = "  ".into(), UserValidationError::EmptyName)]
#[case::bad_email(|r: &mut RegistrationRequest| r.email = "priya".into(), UserValidationError::InvalidEmail)]
#[case::blank_roll(|r: &mut RegistrationRequest| r.roll_number = String::new(), UserValidationError::EmptyRollNumber)]
#[case::blank_branch(|r: &mut RegistrationRequest| r.branch = " ".into(), UserValidationError::EmptyBranch)]
#[case::zero_year(|r: &mut RegistrationRequest| r.year = 0, UserValidationError::InvalidYear)]
fn invalid_requests_are_rejected(
    mut request: RegistrationRequest,
    #[case] mutate: fn(&mut RegistrationRequest),
    #[case] expected: UserValidationError,
) {
    mutate(&mut request);
    assert_eq!(NewUser::try_from(request), Err(expected));
}

#[rstest]
fn user_keeps_registration_fields(request: RegistrationRequest) {
    let id = UserId::new("7").expect("id");
    let draft = NewUser::try_from(request.clone()).expect("draft");
    let user = User::from_new(id.clone(), draft);

    assert_eq!(user.id(), &id);
    assert_eq!(user.name().as_ref(), request.name);
    assert_eq!(user.email().as_ref(), request.email);
    assert_eq!(user.roll_number(), request.roll_number);
    assert_eq!(user.branch(), request.branch);
    assert_eq!(user.year(), request.year);
    assert_eq!(user.avatar(), None);
}

#[rstest]
fn user_serialises_camel_case(request: RegistrationRequest) {
    let draft = NewUser::try_from(request).expect("draft");
    let user = User::from_new(UserId::new("1").expect("id"), draft);
    let value = serde_json::to_value(&user).expect("serialise");

    assert_eq!(
        value,
        json!({
            "id": "1",
            "name": "Priya Sharma",
            "email": "priya@example.com",
            "rollNumber": "CS2021042",
            "branch": "Computer Science",
            "year": 3
        })
    );
    let back: User = serde_json::from_value(value).expect("deserialise");
    assert_eq!(back, user);
}

#[rstest]
#[case(json!({ "id": "1" }))]
#[case(json!({ "id": "", "name": "A", "email": "a@b.co", "rollNumber": "1", "branch": "CS", "year": 1 }))]
#[case(json!({ "id": "1", "name": "A", "email": "nope", "rollNumber": "1", "branch": "CS", "year": 1 }))]
#[case(json!("currentUser"))]
fn malformed_payloads_do_not_deserialise(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<User>(payload).is_err());
}
