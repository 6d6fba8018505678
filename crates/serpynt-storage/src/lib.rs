//! SerPynt Storage Layer
//!
//! Flat key-value settings persisted as a JSON object under the user-data
//! directory. Every mutation is flushed to disk immediately.

mod bootstrap;
mod error;
mod settings;

pub use bootstrap::{ensure_user_data, REQUIRED_FILES, SETTINGS_FILE};
pub use error::StorageError;
pub use settings::SettingsStore;

pub type Result<T> = std::result::Result<T, StorageError>;
