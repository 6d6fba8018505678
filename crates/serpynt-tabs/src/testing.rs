//! Recording engine double for tests.

use parking_lot::Mutex;
use std::sync::Arc;
use url::Url;

use crate::error::TabError;
use crate::view::{EngineView, ViewFactory, ViewSpec};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Navigate(String),
    Back,
    Forward,
    Reload,
    Stop,
    Visible(bool),
    Close,
}

pub type CallLog = Arc<Mutex<Vec<ViewCall>>>;

pub struct RecordingView {
    calls: CallLog,
    refuse_navigation: bool,
}

impl RecordingView {
    pub fn new() -> (Self, CallLog) {
        let calls: CallLog = Arc::default();
        (
            Self {
                calls: Arc::clone(&calls),
                refuse_navigation: false,
            },
            calls,
        )
    }

    /// A view that records navigations but reports each one as failed.
    pub fn refusing_navigation() -> (Self, CallLog) {
        let (mut view, calls) = Self::new();
        view.refuse_navigation = true;
        (view, calls)
    }

    fn record(&self, call: ViewCall) -> Result<()> {
        self.calls.lock().push(call);
        Ok(())
    }
}

impl EngineView for RecordingView {
    fn navigate(&self, url: &Url) -> Result<()> {
        self.record(ViewCall::Navigate(url.to_string()))?;
        if self.refuse_navigation {
            return Err(TabError::Engine("navigation refused".to_string()));
        }
        Ok(())
    }

    fn back(&self) -> Result<()> {
        self.record(ViewCall::Back)
    }

    fn forward(&self) -> Result<()> {
        self.record(ViewCall::Forward)
    }

    fn reload(&self) -> Result<()> {
        self.record(ViewCall::Reload)
    }

    fn stop(&self) -> Result<()> {
        self.record(ViewCall::Stop)
    }

    fn set_visible(&self, visible: bool) -> Result<()> {
        self.record(ViewCall::Visible(visible))
    }

    fn close(&self) -> Result<()> {
        self.record(ViewCall::Close)
    }
}

/// Hands out [`RecordingView`]s and remembers every `ViewSpec` and call log.
#[derive(Default)]
pub struct RecordingFactory {
    created: Mutex<Vec<(ViewSpec, CallLog)>>,
    fail: bool,
    refuse_navigation: bool,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose every `create_view` fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// A factory whose views fail every navigation.
    pub fn refusing_navigation() -> Self {
        Self {
            refuse_navigation: true,
            ..Self::default()
        }
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().len()
    }

    pub fn spec(&self, index: usize) -> ViewSpec {
        self.created.lock()[index].0.clone()
    }

    pub fn calls(&self, index: usize) -> Vec<ViewCall> {
        self.created.lock()[index].1.lock().clone()
    }

    /// Only the navigations sent to the view created `index`-th.
    pub fn navigations(&self, index: usize) -> Vec<String> {
        self.calls(index)
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::Navigate(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn last_call(&self, index: usize) -> Option<ViewCall> {
        self.calls(index).last().cloned()
    }
}

impl ViewFactory for RecordingFactory {
    fn create_view(&self, spec: &ViewSpec) -> Result<Box<dyn EngineView>> {
        if self.fail {
            return Err(TabError::Engine("view creation refused".to_string()));
        }

        let (view, calls) = if self.refuse_navigation {
            RecordingView::refusing_navigation()
        } else {
            RecordingView::new()
        };
        self.created.lock().push((spec.clone(), calls));
        Ok(Box::new(view))
    }
}
