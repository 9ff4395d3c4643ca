//! Error types for the placement-fixtures crate.
//!
//! Fixture loading and student generation each get a semantic error enum
//! built with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a fixture set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file at '{path}': {message}")]
    Io {
        /// Path to the fixture file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The fixture JSON is malformed or missing required fields.
    #[error("invalid fixture JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The fixture format version is not supported.
    #[error("unsupported fixture version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Version found in the document.
        actual: u32,
    },

    /// Two records in the same collection share an identifier.
    #[error("duplicate {collection} id '{id}'")]
    DuplicateId {
        /// Collection holding the duplicate.
        collection: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// Two users share an email address.
    #[error("duplicate user email '{email}'")]
    DuplicateEmail {
        /// The repeated email address.
        email: String,
    },

    /// A record field failed validation.
    #[error("invalid {collection} '{id}': {message}")]
    InvalidRecord {
        /// Collection holding the record.
        collection: &'static str,
        /// Identifier of the offending record.
        id: String,
        /// What is wrong with the record.
        message: String,
    },

    /// A position references a company that does not exist.
    #[error("position '{position_id}' references unknown company '{company_id}'")]
    UnknownCompany {
        /// Offending position.
        position_id: String,
        /// Missing company identifier.
        company_id: String,
    },

    /// An application references a position that does not exist.
    #[error("application '{application_id}' references unknown position '{position_id}'")]
    UnknownPosition {
        /// Offending application.
        application_id: String,
        /// Missing position identifier.
        position_id: String,
    },

    /// An application references a user that does not exist.
    #[error("application '{application_id}' references unknown user '{user_id}'")]
    UnknownUser {
        /// Offending application.
        application_id: String,
        /// Missing user identifier.
        user_id: String,
    },

    /// An application's company does not own its position.
    #[error(
        "application '{application_id}' names company '{actual}' but its position belongs to '{expected}'"
    )]
    CompanyMismatch {
        /// Offending application.
        application_id: String,
        /// Company owning the referenced position.
        expected: String,
        /// Company recorded on the application.
        actual: String,
    },

    /// A user applied to the same position more than once.
    #[error("user '{user_id}' has more than one application for position '{position_id}'")]
    DuplicateApplication {
        /// Applicant.
        user_id: String,
        /// Position applied for.
        position_id: String,
    },
}

/// Errors raised while generating synthetic students.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to produce a valid name after the maximum number of retries.
    #[error("failed to generate valid student name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// The requested identifier range does not fit in `u64`.
    #[error("student id range starting at {first_id} overflows for {count} students")]
    IdOverflow {
        /// First identifier requested.
        first_id: u64,
        /// Number of students requested.
        count: usize,
    },
}
