//! Crash-safe replacement of a single file inside a capability directory.
//!
//! Contents go to a hidden temporary sibling first, are flushed, and are then
//! renamed over the target, so readers see either the old or the new file.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Atomically replace `path` in `dir` with `contents`.
///
/// `path` must be a single normal file name.
pub(super) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> io::Result<()> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} is not a plain file name"),
        ));
    };

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{file_name}.{}.{nanos}.{counter}.tmp", std::process::id());

    if let Err(err) = write_temp(dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    if let Err(err) = replace(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }

    // Directory fsync is not supported everywhere.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;
    use rstest::rstest;

    use super::*;

    fn open(temp: &tempfile::TempDir) -> Dir {
        Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open temp dir")
    }

    #[rstest]
    fn replaces_existing_contents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = open(&temp);
        let path = Utf8Path::new("slot.json");

        write_atomic(&dir, path, "first").expect("write");
        write_atomic(&dir, path, "second").expect("overwrite");

        assert_eq!(dir.read_to_string(path).expect("read"), "second");
    }

    #[rstest]
    fn leaves_no_temporary_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = open(&temp);
        write_atomic(&dir, Utf8Path::new("slot.json"), "{}").expect("write");

        let names: Vec<String> = dir
            .entries()
            .expect("list")
            .map(|entry| {
                entry
                    .expect("entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["slot.json".to_owned()]);
    }

    #[rstest]
    #[case("../escape.json")]
    #[case("nested/slot.json")]
    #[case("")]
    fn rejects_non_file_paths(#[case] raw: &str) {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = open(&temp);
        let err = write_atomic(&dir, Utf8Path::new(raw), "{}").expect_err("rejected");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
