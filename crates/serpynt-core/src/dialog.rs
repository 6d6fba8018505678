//! Settings dialog
//!
//! ```text
//! Closed --open--> Open
//! Open --save/dismiss--> Closed
//! ```
//!
//! Saving writes straight into the settings store. The running window keeps
//! the homepage and user agent it started with.

use serde::{Deserialize, Serialize};
use serpynt_storage::SettingsStore;

use crate::config::{DEFAULT_PAGE, DEFAULT_USER_AGENT, KEY_DEFAULT_PAGE, KEY_USER_AGENT};
use crate::error::CoreError;
use crate::Result;

pub const DIALOG_TITLE: &str = "SerPynt Browser - Settings";
pub const RESTART_NOTICE: &str = "Changes only take effect after restarting";

/// Editable fields, pre-filled from the store. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    pub default_page: String,
    pub user_agent: String,
}

impl SettingsForm {
    pub fn from_store(store: &SettingsStore) -> Self {
        Self {
            default_page: store.get(KEY_DEFAULT_PAGE, DEFAULT_PAGE),
            user_agent: store.get(KEY_USER_AGENT, DEFAULT_USER_AGENT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open(SettingsForm),
}

#[derive(Debug, Default)]
pub struct SettingsDialog {
    state: DialogState,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    pub fn form(&self) -> Option<&SettingsForm> {
        match &self.state {
            DialogState::Open(form) => Some(form),
            DialogState::Closed => None,
        }
    }

    /// Open the dialog. Already open: the existing form is returned as-is.
    pub fn open(&mut self, store: &SettingsStore) -> SettingsForm {
        if let DialogState::Open(form) = &self.state {
            return form.clone();
        }

        let form = SettingsForm::from_store(store);
        self.state = DialogState::Open(form.clone());
        tracing::debug!("Settings dialog opened");
        form
    }

    /// Write both fields to the store and close.
    pub fn save(&mut self, store: &mut SettingsStore, form: SettingsForm) -> Result<()> {
        if !self.is_open() {
            return Err(CoreError::DialogNotOpen);
        }

        store.set(KEY_DEFAULT_PAGE, form.default_page);
        store.set(KEY_USER_AGENT, form.user_agent);
        self.state = DialogState::Closed;

        tracing::info!("Settings saved, effective after restart");
        Ok(())
    }

    /// Close without writing anything.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.state = DialogState::Closed;
            tracing::debug!("Settings dialog dismissed");
        }
    }
}
