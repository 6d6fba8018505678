//! Tab session
//!
//! Owns the ordered tabs of the window and which one is active. The URL bar
//! text and window title are derived from the active tab and recomputed here,
//! so nothing a background tab does can leak into them.

use serde::Serialize;
use url::Url;

use crate::error::TabError;
use crate::event::{EngineEvent, EngineEventKind};
use crate::tab::{Tab, TabId, TabInfo, BLANK_LABEL};
use crate::view::{EngineView, ViewFactory, ViewSpec};
use crate::Result;

/// Window title when the active page has no title.
pub const WINDOW_TITLE_BASE: &str = "SerPynt Browser";

pub struct TabSession {
    tabs: Vec<Tab>,
    /// Index of the active tab; meaningless while `tabs` is empty
    active: usize,
    /// Target of tabs opened without a URL; `None` when the configured
    /// homepage does not parse
    homepage: Option<Url>,
    /// Applied to every view this session creates
    user_agent: String,
    url_bar: String,
    window_title: String,
}

/// Serializable state of the whole session for the UI.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub tabs: Vec<TabInfo>,
    pub active_index: usize,
    pub url_bar: String,
    pub window_title: String,
}

impl TabSession {
    pub fn new(homepage: Option<Url>, user_agent: impl Into<String>) -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
            homepage,
            user_agent: user_agent.into(),
            url_bar: String::new(),
            window_title: WINDOW_TITLE_BASE.to_string(),
        }
    }

    pub fn homepage(&self) -> Option<&Url> {
        self.homepage.as_ref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.tabs.is_empty()).then_some(self.active)
    }

    pub fn active_tab(&self) -> Result<&Tab> {
        self.tabs.get(self.active).ok_or(TabError::NoTabs)
    }

    pub fn active_view(&self) -> Result<&dyn EngineView> {
        Ok(self.active_tab()?.view())
    }

    pub fn url_bar(&self) -> &str {
        &self.url_bar
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn position(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == tab_id)
    }

    /// Open a tab at `url` (the homepage when `None`) and make it active.
    pub fn open_tab(
        &mut self,
        factory: &dyn ViewFactory,
        url: Option<Url>,
        label: &str,
    ) -> Result<TabId> {
        let url = url
            .or_else(|| self.homepage.clone())
            .ok_or(TabError::NoHomepage)?;
        let spec = ViewSpec {
            tab_id: TabId::new(),
            user_agent: self.user_agent.clone(),
        };

        let view = factory.create_view(&spec)?;
        if let Err(e) = view.navigate(&url) {
            if let Err(close_err) = view.close() {
                tracing::warn!(tab_id = %spec.tab_id, error = %close_err, "Failed to close view");
            }
            return Err(e);
        }

        let mut tab = Tab::new(spec.tab_id, label.to_string(), view);
        tab.set_url(url.to_string());

        self.tabs.push(tab);
        let index = self.tabs.len() - 1;

        tracing::info!(tab_id = %spec.tab_id, index, url = %url, "Opened tab");

        self.activate(index)?;
        Ok(spec.tab_id)
    }

    /// Double activation on the empty part of the tab bar.
    pub fn activate_empty_area(&mut self, factory: &dyn ViewFactory) -> Result<TabId> {
        self.open_tab(factory, None, BLANK_LABEL)
    }

    /// Close the tab at `index`.
    ///
    /// Returns `false` without doing anything when it is the only tab. When
    /// the active tab closes, the tab that moves into its index becomes
    /// active, or the new last tab if it was last.
    pub fn close_tab(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;

        if self.tabs.len() < 2 {
            tracing::debug!(index, "Refusing to close the last tab");
            return Ok(false);
        }

        let tab = self.tabs.remove(index);
        if let Err(e) = tab.view().close() {
            tracing::warn!(tab_id = %tab.id(), error = %e, "Failed to close view");
        }

        tracing::info!(tab_id = %tab.id(), index, "Closed tab");

        let next = if index < self.active {
            self.active - 1
        } else if index == self.active {
            index.min(self.tabs.len() - 1)
        } else {
            self.active
        };

        self.activate(next)?;
        Ok(true)
    }

    /// Make the tab at `index` active and re-sync the URL bar and title.
    pub fn activate(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.active = index;

        for (i, tab) in self.tabs.iter().enumerate() {
            if let Err(e) = tab.view().set_visible(i == index) {
                tracing::warn!(tab_id = %tab.id(), error = %e, "Failed to toggle view visibility");
            }
        }

        self.sync_active();

        tracing::debug!(index, url = %self.url_bar, "Activated tab");
        Ok(())
    }

    /// Send the active tab to `url`.
    pub fn navigate_active(&mut self, url: &Url) -> Result<()> {
        let tab = self.tabs.get_mut(self.active).ok_or(TabError::NoTabs)?;
        tab.view().navigate(url)?;
        tab.set_url(url.to_string());

        self.url_bar = url.to_string();
        Ok(())
    }

    /// Apply an engine callback.
    ///
    /// Returns whether anything visible changed. Events from tabs that have
    /// since been closed are dropped.
    pub fn handle_event(&mut self, event: EngineEvent) -> bool {
        let Some(index) = self.position(event.tab_id) else {
            tracing::debug!(tab_id = %event.tab_id, "Event for closed tab ignored");
            return false;
        };

        let is_active = index == self.active;
        let tab = &mut self.tabs[index];

        match event.kind {
            EngineEventKind::UrlChanged(url) => {
                tab.set_url(url);
                if is_active {
                    self.url_bar = tab.url().to_string();
                }
                is_active
            }
            EngineEventKind::TitleChanged(title) => {
                tab.set_title(title);
                tab.refresh_label();
                if is_active {
                    self.window_title = Self::title_for(tab);
                }
                true
            }
            EngineEventKind::LoadFinished => {
                tab.refresh_label();
                if is_active {
                    self.window_title = Self::title_for(tab);
                }
                true
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tabs: self.tabs.iter().map(Tab::info).collect(),
            active_index: self.active,
            url_bar: self.url_bar.clone(),
            window_title: self.window_title.clone(),
        }
    }

    fn sync_active(&mut self) {
        if let Some(tab) = self.tabs.get(self.active) {
            self.url_bar = tab.url().to_string();
            self.window_title = Self::title_for(tab);
        }
    }

    fn title_for(tab: &Tab) -> String {
        let title = tab.title().trim();
        if title.is_empty() {
            WINDOW_TITLE_BASE.to_string()
        } else {
            format!("{title} - {WINDOW_TITLE_BASE}")
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(TabError::IndexOutOfRange {
                index,
                len: self.tabs.len(),
            })
        }
    }
}
