//! Field validation mirroring backend constraints.
//!
//! These rules match the backend's `Email` and `PersonName` types in
//! `backend/src/domain/user.rs`. Keeping them in sync means every fixture
//! and generated student converts cleanly into backend domain types.
//!
//! # Validation Rules
//!
//! - Names: non-blank, at most [`NAME_MAX`] characters
//! - Emails: one `@`, no whitespace, a non-empty local part and a domain with
//!   an inner dot

/// Maximum allowed length for a person's name.
pub const NAME_MAX: usize = 64;

/// Validates a person's name against backend constraints.
///
/// # Examples
///
/// ```
/// use placement_fixtures::is_valid_name;
///
/// assert!(is_valid_name("Jane Smith"));
/// assert!(!is_valid_name("   "));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= NAME_MAX
}

/// Validates an email address against backend constraints.
///
/// # Examples
///
/// ```
/// use placement_fixtures::is_valid_email;
///
/// assert!(is_valid_email("jane.smith@example.edu"));
/// assert!(!is_valid_email("jane.smith"));
/// assert!(!is_valid_email("jane@localhost"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

/// Returns `true` when the value is empty once trimmed.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Keeps ASCII letters and spaces from a generated name.
pub(crate) fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("first.last@students.example.edu", true)]
    #[case("@example.edu", false)]
    #[case("user@", false)]
    #[case("user@.edu", false)]
    #[case("user@edu.", false)]
    #[case("user@@example.edu", false)]
    #[case("us er@example.edu", false)]
    fn email_rules(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected, "email: {email}");
    }

    #[rstest]
    #[case("Jane", true)]
    #[case("", false)]
    #[case(" \t", false)]
    fn name_rules(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_name(name), expected);
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "a".repeat(NAME_MAX + 1);
        assert!(!is_valid_name(&name));
    }

    #[test]
    fn sanitize_drops_punctuation() {
        assert_eq!(sanitize_name("O'Connor-Smith"), "OConnorSmith");
    }
}
