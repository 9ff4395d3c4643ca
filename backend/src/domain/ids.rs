//! String identifiers for domain records.
//!
//! Identifiers are opaque strings. Fixture data uses short numeric strings
//! (`"1"`, `"2"`) while tests and callers may use any non-blank token such as
//! `"c1"`. Each record kind gets its own newtype so ids cannot be mixed up.

use std::fmt;

/// Validation errors returned when constructing an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdValidationError {
    /// The identifier was empty.
    Empty,
    /// The identifier had leading or trailing whitespace.
    Padded,
}

impl fmt::Display for IdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier must not be empty"),
            Self::Padded => write!(f, "identifier must not have surrounding whitespace"),
        }
    }
}

impl std::error::Error for IdValidationError {}

fn validate_id(raw: &str) -> Result<(), IdValidationError> {
    if raw.is_empty() {
        return Err(IdValidationError::Empty);
    }
    if raw.trim() != raw {
        return Err(IdValidationError::Padded);
    }
    Ok(())
}

macro_rules! define_string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier from borrowed input.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
                Self::from_owned(id.as_ref().to_owned())
            }

            fn from_owned(id: String) -> Result<Self, IdValidationError> {
                validate_id(&id)?;
                Ok(Self(id))
            }

            /// Numeric value of the identifier, when it is a plain integer.
            pub fn numeric(&self) -> Option<u64> {
                self.0.parse().ok()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_owned(value)
            }
        }
    };
}

define_string_id! {
    /// Student account identifier.
    UserId
}

define_string_id! {
    /// Employer identifier.
    CompanyId
}

define_string_id! {
    /// Job opening identifier.
    PositionId
}

define_string_id! {
    /// Application identifier.
    ApplicationId
}
