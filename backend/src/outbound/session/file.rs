//! Session slots persisted as files.
//!
//! Each key maps to `<key>.json` inside one directory, opened once as a
//! capability handle. Nothing outside that directory is reachable.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_io::write_atomic;
use crate::domain::ports::{SessionStore, SessionStoreError};

/// Session store that survives process restarts.
#[derive(Debug)]
pub struct FileSessionStore {
    dir: Dir,
}

impl FileSessionStore {
    /// Open (creating if needed) the session directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Io`] when the directory cannot be
    /// created or opened.
    ///
    /// # Examples
    /// ```
    /// use placement_portal::outbound::session::FileSessionStore;
    ///
    /// let temp = tempfile::tempdir().expect("tempdir");
    /// let store = FileSessionStore::open(&temp.path().join("sessions")).expect("open");
    /// # let _ = store;
    /// ```
    pub fn open(path: &Path) -> Result<Self, SessionStoreError> {
        let failed = |err: io::Error| SessionStoreError::io(format!("{}: {err}", path.display()));
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(failed)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(failed)?;
        debug!(path = %path.display(), "opened session directory");
        Ok(Self { dir })
    }
}

/// File holding `key`. Keys are restricted to ASCII letters, digits, `-`
/// and `_` so a key can never name a path outside the directory.
fn slot_file(key: &str) -> Result<Utf8PathBuf, SessionStoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(SessionStoreError::invalid_key(key));
    }
    Ok(Utf8PathBuf::from(format!("{key}.json")))
}

fn io_error(file: &Utf8PathBuf, err: &io::Error) -> SessionStoreError {
    SessionStoreError::io(format!("{file}: {err}"))
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let file = slot_file(key)?;
        match self.dir.read_to_string(&file) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&file, &err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let file = slot_file(key)?;
        write_atomic(&self.dir, &file, value).map_err(|err| io_error(&file, &err))
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        let file = slot_file(key)?;
        match self.dir.remove_file(&file) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&file, &err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("currentUser", true)]
    #[case("session_2-b", true)]
    #[case("", false)]
    #[case("../etc/passwd", false)]
    #[case("a.b", false)]
    #[case("a/b", false)]
    fn slot_keys_are_restricted(#[case] key: &str, #[case] valid: bool) {
        assert_eq!(slot_file(key).is_ok(), valid);
    }

    #[tokio::test]
    async fn invalid_keys_are_reported() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = FileSessionStore::open(temp.path()).expect("open");
        let err = store.get("../x").await.expect_err("invalid key");
        assert_eq!(err, SessionStoreError::invalid_key("../x"));
    }
}
