//! Tab management commands
use serde::Serialize;
use serpynt_core::SessionSnapshot;
use tauri::{AppHandle, Manager, Window};

use super::apply;
use super::webview::TauriViewFactory;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

fn events_for(app: &AppHandle) -> Option<tokio::sync::mpsc::UnboundedSender<serpynt_core::EngineEvent>> {
    app.try_state::<AppState>().map(|state| state.events())
}

#[tauri::command]
pub async fn get_shell(app: AppHandle) -> CommandResult<SessionSnapshot> {
    match app.try_state::<AppState>() {
        Some(state) => CommandResult::ok(state.snapshot()),
        None => CommandResult::err("Browser state not found".to_string()),
    }
}

#[tauri::command]
pub async fn open_tab(
    app: AppHandle,
    window: Window,
    url: Option<String>,
) -> CommandResult<SessionSnapshot> {
    let Some(events) = events_for(&app) else {
        return CommandResult::err("Browser state not found".to_string());
    };
    let factory = TauriViewFactory::new(&window, events);

    apply(&app, |browser| {
        browser.open_tab(&factory, url.as_deref(), None)?;
        Ok(())
    })
}

#[tauri::command]
pub async fn close_tab(app: AppHandle, index: usize) -> CommandResult<SessionSnapshot> {
    apply(&app, |browser| {
        browser.close_tab(index)?;
        Ok(())
    })
}

#[tauri::command]
pub async fn activate_tab(app: AppHandle, index: usize) -> CommandResult<SessionSnapshot> {
    apply(&app, |browser| browser.activate_tab(index))
}

/// Double-click on the tab bar past the last tab
#[tauri::command]
pub async fn activate_empty_area(app: AppHandle, window: Window) -> CommandResult<SessionSnapshot> {
    let Some(events) = events_for(&app) else {
        return CommandResult::err("Browser state not found".to_string());
    };
    let factory = TauriViewFactory::new(&window, events);

    apply(&app, |browser| {
        browser.activate_empty_area(&factory)?;
        Ok(())
    })
}
