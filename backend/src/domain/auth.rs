//! Login credentials.
//!
//! Inbound adapters build [`LoginCredentials`] from raw strings before
//! calling the account port, so the service only ever sees shaped input.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or only whitespace.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is kept exactly as supplied and must not be blank. Lookups are
///   exact, so surrounding whitespace means no account matches.
/// - `password` is non-empty and kept in zeroizing memory. Accounts carry no
///   stored credential, so the password is accepted without verification.
///
/// # Examples
/// ```
/// use placement_portal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("john@example.com", "pw").unwrap();
/// assert_eq!(creds.email(), "john@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        if email.trim().is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("  ", "pw", LoginValidationError::EmptyEmail)]
    #[case("john@example.com", "", LoginValidationError::EmptyPassword)]
    fn rejects_blank_parts(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("blank inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn keeps_email_exactly_as_supplied() {
        let creds = LoginCredentials::try_from_parts(" john@example.com ", "pw")
            .expect("valid credentials");
        assert_eq!(creds.email(), " john@example.com ");
    }

    #[rstest]
    fn keeps_password_whitespace() {
        let creds = LoginCredentials::try_from_parts("john@example.com", " pw ")
            .expect("valid credentials");
        assert_eq!(creds.password(), " pw ");
    }
}
