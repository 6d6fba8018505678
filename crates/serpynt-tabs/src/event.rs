//! Engine callback events
//!
//! Every callback registered on a view carries the id of the tab that owns
//! it, fixed at creation time. The session uses that id, never the current
//! position of the tab, to decide what to update.

use serde::{Deserialize, Serialize};

use crate::tab::TabId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EngineEventKind {
    /// The view committed to a new URL
    UrlChanged(String),
    /// The document title changed
    TitleChanged(String),
    /// The page finished loading
    LoadFinished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEvent {
    pub tab_id: TabId,
    pub kind: EngineEventKind,
}

impl EngineEvent {
    pub fn url_changed(tab_id: TabId, url: impl Into<String>) -> Self {
        Self {
            tab_id,
            kind: EngineEventKind::UrlChanged(url.into()),
        }
    }

    pub fn title_changed(tab_id: TabId, title: impl Into<String>) -> Self {
        Self {
            tab_id,
            kind: EngineEventKind::TitleChanged(title.into()),
        }
    }

    pub fn load_finished(tab_id: TabId) -> Self {
        Self {
            tab_id,
            kind: EngineEventKind::LoadFinished,
        }
    }
}
