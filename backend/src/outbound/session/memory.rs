//! Process-local session slots.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{SessionStore, SessionStoreError};

/// Session slots held in memory. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slots: RwLock<HashMap<String, String>>,
}

fn poisoned<T>(_: T) -> SessionStoreError {
    SessionStoreError::io("session lock poisoned")
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.remove(key);
        Ok(())
    }
}
