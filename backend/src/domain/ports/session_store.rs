//! Port for the durable key-value session slot.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session store adapters.
    pub enum SessionStoreError {
        /// The key cannot name a slot.
        InvalidKey { key: String } => "invalid session key `{key}`",
        /// The backing medium could not be read or written.
        Io { message: String } => "session store i/o failed: {message}",
    }
}

/// Durable string slots keyed by name. Writes are last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a slot. A missing slot is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Replace the slot's contents.
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Clear the slot. Removing a missing slot succeeds.
    async fn remove(&self, key: &str) -> Result<(), SessionStoreError>;
}
