//! Tab data structure

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::view::EngineView;

/// Label of a tab whose page has not reported a title yet.
pub const BLANK_LABEL: &str = "Blank";

/// Stable identity of a tab. Survives reordering and closing of other tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TabId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

pub struct Tab {
    id: TabId,
    /// Text shown on the tab
    label: String,
    /// Last URL the view committed to or was sent to
    url: String,
    /// Last document title the view reported
    title: String,
    view: Box<dyn EngineView>,
}

impl Tab {
    pub(crate) fn new(id: TabId, label: String, view: Box<dyn EngineView>) -> Self {
        Self {
            id,
            label,
            url: String::new(),
            title: String::new(),
            view,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn view(&self) -> &dyn EngineView {
        self.view.as_ref()
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.url = url;
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Copy the page title onto the tab label. An empty title keeps the
    /// current label.
    pub(crate) fn refresh_label(&mut self) {
        if !self.title.trim().is_empty() {
            self.label = self.title.clone();
        }
    }

    pub fn info(&self) -> TabInfo {
        TabInfo {
            id: self.id,
            label: self.label.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
        }
    }
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("url", &self.url)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Serializable description of a tab for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub label: String,
    pub url: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingView;

    #[test]
    fn test_tab_id_roundtrips_through_string() {
        let id = TabId::new();
        let parsed: TabId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert_ne!(id, TabId::new());
    }

    #[test]
    fn test_label_follows_non_empty_title() {
        let (view, _calls) = RecordingView::new();
        let mut tab = Tab::new(TabId::new(), BLANK_LABEL.to_string(), Box::new(view));

        tab.refresh_label();
        assert_eq!(tab.label(), BLANK_LABEL);

        tab.set_title("Example Domain".to_string());
        tab.refresh_label();
        assert_eq!(tab.label(), "Example Domain");

        tab.set_title("   ".to_string());
        tab.refresh_label();
        assert_eq!(tab.label(), "Example Domain");
    }
}
