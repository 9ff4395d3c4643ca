//! Driving ports for authentication and the current session.
//!
//! Inbound adapters log students in and out through [`AccountCommand`] and
//! ask who is logged in through [`SessionQuery`].

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, RegistrationRequest, User};

/// Mutations of the account collection and the session slot.
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Log in by exact email match and record the session.
    ///
    /// Fails with `InvalidCredentials` when no account has the email.
    async fn login(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Create an account and record it as the session.
    ///
    /// Fails with `InvalidRequest` for a malformed request and `EmailInUse`
    /// when the email already has an account.
    async fn register(&self, request: RegistrationRequest) -> Result<User, Error>;

    /// Clear the session slot. Idempotent.
    async fn logout(&self) -> Result<(), Error>;
}

/// Read access to the session slot.
#[async_trait]
pub trait SessionQuery: Send + Sync {
    /// The logged-in user, if any.
    ///
    /// A missing, unreadable or unparsable slot yields `None`.
    async fn current_user(&self) -> Option<User>;
}
