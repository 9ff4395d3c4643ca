//! Student account model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::UserId;

/// Validation errors returned when building users and registration drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId,
    EmptyName,
    NameTooLong { max: usize },
    InvalidEmail,
    EmptyRollNumber,
    EmptyBranch,
    InvalidYear,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a non-blank token"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::InvalidEmail => write!(f, "email must look like local@domain.tld"),
            Self::EmptyRollNumber => write!(f, "roll number must not be empty"),
            Self::EmptyBranch => write!(f, "branch must not be empty"),
            Self::InvalidYear => write!(f, "year of study must be at least 1"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Maximum allowed length for a person's name.
pub const NAME_MAX: usize = placement_fixtures::NAME_MAX;

/// Full name of a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.chars().count() > NAME_MAX {
            return Err(UserValidationError::NameTooLong { max: NAME_MAX });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address used as the login identity.
///
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    ///
    /// # Examples
    /// ```
    /// use placement_portal::domain::Email;
    ///
    /// assert!(Email::new("john@example.com").is_ok());
    /// assert!(Email::new("john@localhost").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Raw registration payload as supplied by an inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Institutional roll number.
    pub roll_number: String,
    /// Programme of study.
    pub branch: String,
    /// Year of study, starting at 1.
    pub year: u8,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Validated registration draft awaiting an identifier.
///
/// ## Invariants
/// - `roll_number` and `branch` are non-blank.
/// - `year` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: PersonName,
    email: Email,
    roll_number: String,
    branch: String,
    year: u8,
    avatar: Option<String>,
}

impl NewUser {
    /// Email the new account will log in with.
    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl TryFrom<RegistrationRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: RegistrationRequest) -> Result<Self, Self::Error> {
        let RegistrationRequest {
            name,
            email,
            roll_number,
            branch,
            year,
            avatar,
        } = value;

        let name = PersonName::new(name)?;
        let email = Email::new(email)?;
        if roll_number.trim().is_empty() {
            return Err(UserValidationError::EmptyRollNumber);
        }
        if branch.trim().is_empty() {
            return Err(UserValidationError::EmptyBranch);
        }
        if year == 0 {
            return Err(UserValidationError::InvalidYear);
        }

        Ok(Self {
            name,
            email,
            roll_number,
            branch,
            year,
            avatar,
        })
    }
}

/// Registered student.
///
/// Users are immutable once created. The serialised form is the camelCase
/// record stored in the session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: PersonName,
    email: Email,
    roll_number: String,
    branch: String,
    year: u8,
    avatar: Option<String>,
}

impl User {
    /// Assign an identifier to a validated registration draft.
    pub fn from_new(id: UserId, draft: NewUser) -> Self {
        let NewUser {
            name,
            email,
            roll_number,
            branch,
            year,
            avatar,
        } = draft;
        Self {
            id,
            name,
            email,
            roll_number,
            branch,
            year,
            avatar,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Full name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Login email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Institutional roll number.
    pub fn roll_number(&self) -> &str {
        self.roll_number.as_str()
    }

    /// Programme of study.
    pub fn branch(&self) -> &str {
        self.branch.as_str()
    }

    /// Year of study.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// Avatar URL, when one was supplied.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    name: String,
    email: String,
    roll_number: String,
    branch: String,
    year: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id.into(),
            name: value.name.into(),
            email: value.email.into(),
            roll_number: value.roll_number,
            branch: value.branch,
            year: value.year,
            avatar: value.avatar,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let id = UserId::new(&value.id).map_err(|_| UserValidationError::InvalidId)?;
        let draft = NewUser::try_from(RegistrationRequest {
            name: value.name,
            email: value.email,
            roll_number: value.roll_number,
            branch: value.branch,
            year: value.year,
            avatar: value.avatar,
        })?;
        Ok(Self::from_new(id, draft))
    }
}

#[cfg(test)]
mod tests;
