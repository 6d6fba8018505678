//! Content webviews
//!
//! Each tab owns one child webview of the main window, placed under the
//! browser chrome. Its callbacks capture the tab id at creation and only
//! post events; the pump applies them to the browser state.

use serpynt_core::{EngineEvent, EngineView, SessionSnapshot, TabError, TabId, ViewFactory, ViewSpec};
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::webview::{PageLoadEvent, Webview, WebviewBuilder};
use tauri::{AppHandle, Emitter, LogicalPosition, LogicalSize, Manager, WebviewUrl, Window};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use url::Url;

use super::{ui_webview_label, MAIN_WINDOW_LABEL};
use crate::state::AppState;

/// Height of the tab bar plus toolbar in the UI webview
pub const CHROME_HEIGHT: f64 = 84.0;

/// Page every content webview starts on before its first navigation
const PLACEHOLDER_URL: &str = "about:blank";

type ViewResult = std::result::Result<(), TabError>;

fn content_webview_label(tab_id: TabId) -> String {
    format!("content-{tab_id}")
}

/// Drops the page-load events of the placeholder a view is created on.
/// Once any other page loads, later visits to the placeholder URL are real
/// navigations and pass through.
#[derive(Debug)]
struct PlaceholderFilter {
    pending: AtomicBool,
}

impl PlaceholderFilter {
    fn new() -> Self {
        Self {
            pending: AtomicBool::new(true),
        }
    }

    fn forward(&self, url: &str) -> bool {
        if url == PLACEHOLDER_URL && self.pending.load(Ordering::Acquire) {
            return false;
        }
        self.pending.store(false, Ordering::Release);
        true
    }
}

fn engine_error(e: tauri::Error) -> TabError {
    TabError::Engine(e.to_string())
}

pub struct TauriView {
    webview: Webview,
}

impl EngineView for TauriView {
    fn navigate(&self, url: &Url) -> ViewResult {
        self.webview.navigate(url.clone()).map_err(engine_error)?;
        tracing::debug!(label = %self.webview.label(), url = %url, "Navigated webview");
        Ok(())
    }

    fn back(&self) -> ViewResult {
        self.webview.eval("history.back()").map_err(engine_error)
    }

    fn forward(&self) -> ViewResult {
        self.webview.eval("history.forward()").map_err(engine_error)
    }

    fn reload(&self) -> ViewResult {
        self.webview.reload().map_err(engine_error)
    }

    fn stop(&self) -> ViewResult {
        self.webview.eval("window.stop()").map_err(engine_error)
    }

    fn set_visible(&self, visible: bool) -> ViewResult {
        if visible {
            self.webview.show().map_err(engine_error)
        } else {
            self.webview.hide().map_err(engine_error)
        }
    }

    fn close(&self) -> ViewResult {
        self.webview.close().map_err(engine_error)?;
        tracing::info!(label = %self.webview.label(), "Closed webview");
        Ok(())
    }
}

/// Builds content webviews inside `window`.
pub struct TauriViewFactory<'a> {
    window: &'a Window,
    events: UnboundedSender<EngineEvent>,
}

impl<'a> TauriViewFactory<'a> {
    pub fn new(window: &'a Window, events: UnboundedSender<EngineEvent>) -> Self {
        Self { window, events }
    }
}

impl ViewFactory for TauriViewFactory<'_> {
    fn create_view(&self, spec: &ViewSpec) -> std::result::Result<Box<dyn EngineView>, TabError> {
        let label = content_webview_label(spec.tab_id);
        let placeholder: Url = PLACEHOLDER_URL
            .parse()
            .map_err(|e: url::ParseError| TabError::Engine(e.to_string()))?;

        let tab_id = spec.tab_id;
        let load_events = self.events.clone();
        let title_events = self.events.clone();
        let placeholder_filter = PlaceholderFilter::new();

        let builder = WebviewBuilder::new(&label, WebviewUrl::External(placeholder))
            .user_agent(&spec.user_agent)
            .auto_resize()
            .on_page_load(move |_webview, payload| {
                let url = payload.url().to_string();
                if !placeholder_filter.forward(&url) {
                    return;
                }

                let _ = load_events.send(EngineEvent::url_changed(tab_id, url));
                if let PageLoadEvent::Finished = payload.event() {
                    let _ = load_events.send(EngineEvent::load_finished(tab_id));
                }
            })
            .on_document_title_changed(move |_webview, title| {
                let _ = title_events.send(EngineEvent::title_changed(tab_id, title));
            });

        let scale = self.window.scale_factor().map_err(engine_error)?;
        let size = self
            .window
            .inner_size()
            .map_err(engine_error)?
            .to_logical::<f64>(scale);

        let webview = self
            .window
            .add_child(
                builder,
                LogicalPosition::new(0.0, CHROME_HEIGHT),
                LogicalSize::new(size.width, (size.height - CHROME_HEIGHT).max(0.0)),
            )
            .map_err(|e| {
                tracing::error!(label = %label, tab_id = %tab_id, error = %e, "Failed to create child webview");
                engine_error(e)
            })?;

        tracing::info!(label = %label, tab_id = %tab_id, "Created child webview");
        Ok(Box::new(TauriView { webview }))
    }
}

/// Push the session state to the window title and the browser chrome.
pub fn publish(app: &AppHandle, snapshot: &SessionSnapshot) {
    if let Some(window) = app.get_window(MAIN_WINDOW_LABEL) {
        if let Err(e) = window.set_title(&snapshot.window_title) {
            tracing::warn!(error = %e, "Failed to set window title");
        }
    }

    let ui_label = ui_webview_label(MAIN_WINDOW_LABEL);
    if let Err(e) = app.emit_to(ui_label.as_str(), "shell-updated", snapshot.clone()) {
        tracing::warn!(error = %e, "Failed to emit shell update");
    }
}

/// Apply engine callbacks one at a time, off the UI thread.
pub fn spawn_event_pump(app: AppHandle, mut inbox: UnboundedReceiver<EngineEvent>) {
    tauri::async_runtime::spawn(async move {
        while let Some(event) = inbox.recv().await {
            let Some(state) = app.try_state::<AppState>() else {
                continue;
            };

            let changed = state
                .with_browser_mut(|browser| Ok(browser.handle_event(event)))
                .unwrap_or(false);

            if changed {
                publish(&app, &state.snapshot());
            }
        }

        tracing::debug!("Engine event pump stopped");
    });
}
