//! Settings store
//!
//! A flat JSON object on disk. Values are read as strings; anything else
//! stored under a key is kept as-is and written back untouched.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::Result;

pub struct SettingsStore {
    /// File the settings are read from and flushed to
    path: PathBuf,
    /// Whole JSON object, including keys this program does not know
    values: Map<String, Value>,
}

impl SettingsStore {
    /// Load settings from `path`.
    ///
    /// Never fails: an unreadable or corrupt file yields an empty store and a
    /// logged diagnostic. An empty file is a fresh store, not an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load settings, continuing with defaults"
                );
                Map::new()
            }
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "Loaded settings");

        Self { path, values }
    }

    /// A store with no backing content yet. Nothing is written until `set`.
    pub fn empty<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            values: Map::new(),
        }
    }

    fn read(path: &Path) -> Result<Map<String, Value>> {
        let content = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(StorageError::NotAnObject(path.to_path_buf())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored string for `key`, or `default` when absent or not a string.
    pub fn get(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                tracing::debug!(key, value = %other, "Non-string setting, using default");
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Set `key` and flush to disk.
    ///
    /// A failed flush is logged; the new value stays in memory for the rest
    /// of the session.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), Value::String(value.into()));

        if let Err(e) = self.save() {
            tracing::warn!(
                path = %self.path.display(),
                key,
                error = %e,
                "Failed to save settings to file"
            );
        }
    }

    /// Write the whole object to disk, pretty-printed with 4-space indent.
    pub fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.values.serialize(&mut serializer)?;

        fs::write(&self.path, buf).map_err(|e| StorageError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}
