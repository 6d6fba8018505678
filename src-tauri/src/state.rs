//! Application state management
use parking_lot::RwLock;
use serpynt_core::{Browser, Config, EngineEvent, Result, SessionSnapshot};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Shared browser state plus the inbox for engine callbacks.
///
/// Engine callbacks run on the UI thread and must never wait for the
/// browser lock, so they only ever post into `events`.
pub struct AppState {
    browser: Arc<RwLock<Browser>>,
    events: UnboundedSender<EngineEvent>,
}

impl AppState {
    pub fn new() -> (Self, UnboundedReceiver<EngineEvent>) {
        let (events, inbox) = mpsc::unbounded_channel();
        let browser = Browser::new(Config::default());

        (
            Self {
                browser: Arc::new(RwLock::new(browser)),
                events,
            },
            inbox,
        )
    }

    pub fn events(&self) -> UnboundedSender<EngineEvent> {
        self.events.clone()
    }

    pub fn with_browser_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Browser) -> Result<T>,
    {
        f(&mut self.browser.write())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.browser.read().snapshot()
    }
}
