//! Port abstraction for student account storage.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Another account already uses the email.
        DuplicateEmail { email: String } => "email {email} is already registered",
        /// Reading or mutating the collection failed.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for registered students.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the account whose email matches exactly.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Assign an identifier and append the account.
    ///
    /// The email uniqueness check and the append happen under one write, so
    /// two registrations for the same email cannot both succeed.
    async fn insert(&self, draft: NewUser) -> Result<User, UserRepositoryError>;

    /// Delete the account with `id`, returning whether one was removed.
    ///
    /// Used to undo an insert whose follow-up step failed. Removed
    /// identifiers are not handed out again.
    async fn remove(&self, id: &UserId) -> Result<bool, UserRepositoryError>;
}
