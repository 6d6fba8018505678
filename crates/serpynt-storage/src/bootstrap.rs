//! User-data directory bootstrap
//!
//! Runs once before the settings store is loaded. Creates what is missing and
//! never inspects what already exists.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::Result;

/// Name of the settings file inside the user-data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Files that must exist in the user-data directory before startup continues.
pub const REQUIRED_FILES: &[&str] = &[SETTINGS_FILE];

/// Ensure `dir` and every file in [`REQUIRED_FILES`] exist.
///
/// Returns the path of the settings file.
pub fn ensure_user_data<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
        tracing::info!(path = %dir.display(), "Created user data directory");
    }

    for name in REQUIRED_FILES {
        let path = dir.join(name);
        if path.is_file() {
            continue;
        }

        // create_new so a file appearing concurrently is left alone
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => tracing::info!(path = %path.display(), "Created empty user data file"),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(StorageError::io(path, e)),
        }
    }

    Ok(dir.join(SETTINGS_FILE))
}
