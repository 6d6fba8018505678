//! Settings dialog commands
//!
//! The dialog is a child window of the main window. While it is open the main
//! window is disabled. Closing the dialog window by any means counts as
//! dismissing the dialog.

use serde::Serialize;
use serpynt_core::{SettingsForm, DIALOG_TITLE, RESTART_NOTICE};
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager, WebviewUrl, Window};

use super::tabs::CommandResult;
use super::{ui_webview_label, MAIN_WINDOW_LABEL};
use crate::state::AppState;

pub const SETTINGS_WINDOW_LABEL: &str = "settings";

const SETTINGS_WIDTH: f64 = 520.0;
const SETTINGS_HEIGHT: f64 = 280.0;

/// Windows whose destruction affects the settings dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogWindow {
    /// Owner of the dialog; the dialog goes with it
    Main,
    /// The dialog itself; gone means dismissed
    Settings,
}

impl DialogWindow {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            MAIN_WINDOW_LABEL => Some(Self::Main),
            SETTINGS_WINDOW_LABEL => Some(Self::Settings),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsDialogInfo {
    pub title: &'static str,
    pub notice: &'static str,
    pub form: SettingsForm,
}

pub fn close_settings_window(app: &AppHandle) {
    if let Some(window) = app.get_window(SETTINGS_WINDOW_LABEL) {
        if let Err(e) = window.close() {
            tracing::warn!(error = %e, "Failed to close settings window");
        }
    }
}

/// Give input back to the main window once the dialog is gone.
pub fn release_main_window(app: &AppHandle) {
    if let Some(main) = app.get_window(MAIN_WINDOW_LABEL) {
        if let Err(e) = main.set_enabled(true) {
            tracing::warn!(error = %e, "Failed to re-enable main window");
        }
        let _ = main.set_focus();
    }
}

fn build_settings_window(app: &AppHandle, main: &Window) -> tauri::Result<()> {
    let window = WindowBuilder::new(app, SETTINGS_WINDOW_LABEL)
        .title(DIALOG_TITLE)
        .inner_size(SETTINGS_WIDTH, SETTINGS_HEIGHT)
        .resizable(false)
        .minimizable(false)
        .parent(main)?
        .center()
        .build()?;

    let form_webview = WebviewBuilder::new(
        ui_webview_label(SETTINGS_WINDOW_LABEL),
        WebviewUrl::App("settings.html".into()),
    )
    .auto_resize();

    if let Err(e) = window.add_child(
        form_webview,
        LogicalPosition::new(0.0, 0.0),
        LogicalSize::new(SETTINGS_WIDTH, SETTINGS_HEIGHT),
    ) {
        let _ = window.close();
        return Err(e);
    }

    Ok(())
}

/// Closed -> Open. Focuses the window when the dialog is already open.
#[tauri::command]
pub async fn open_settings(app: AppHandle) -> CommandResult<()> {
    let Some(state) = app.try_state::<AppState>() else {
        return CommandResult::err("Browser state not found".to_string());
    };

    if let Err(e) = state.with_browser_mut(|browser| {
        browser.open_settings();
        Ok(())
    }) {
        return CommandResult::err(e.to_string());
    }

    if let Some(window) = app.get_window(SETTINGS_WINDOW_LABEL) {
        let _ = window.set_focus();
        return CommandResult::ok(());
    }

    let built = match app.get_window(MAIN_WINDOW_LABEL) {
        Some(main) => build_settings_window(&app, &main).map(|()| main),
        None => Err(tauri::Error::WindowNotFound),
    };

    match built {
        Ok(main) => {
            if let Err(e) = main.set_enabled(false) {
                tracing::warn!(error = %e, "Failed to disable main window");
            }
            tracing::info!("Opened settings window");
            CommandResult::ok(())
        }
        Err(e) => {
            let _ = state.with_browser_mut(|browser| {
                browser.dismiss_settings();
                Ok(())
            });
            CommandResult::err(format!("Failed to open settings window: {e}"))
        }
    }
}

#[tauri::command]
pub async fn get_settings_form(app: AppHandle) -> CommandResult<SettingsDialogInfo> {
    let Some(state) = app.try_state::<AppState>() else {
        return CommandResult::err("Browser state not found".to_string());
    };

    match state.with_browser_mut(|browser| Ok(browser.open_settings())) {
        Ok(form) => CommandResult::ok(SettingsDialogInfo {
            title: DIALOG_TITLE,
            notice: RESTART_NOTICE,
            form,
        }),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Open -> Closed, writing both fields to the settings file.
#[tauri::command]
pub async fn save_settings(app: AppHandle, form: SettingsForm) -> CommandResult<()> {
    let Some(state) = app.try_state::<AppState>() else {
        return CommandResult::err("Browser state not found".to_string());
    };

    if let Err(e) = state.with_browser_mut(|browser| browser.save_settings(form)) {
        return CommandResult::err(e.to_string());
    }

    close_settings_window(&app);
    CommandResult::ok(())
}

/// Open -> Closed without writing.
#[tauri::command]
pub async fn dismiss_settings(app: AppHandle) -> CommandResult<()> {
    let Some(state) = app.try_state::<AppState>() else {
        return CommandResult::err("Browser state not found".to_string());
    };

    let _ = state.with_browser_mut(|browser| {
        browser.dismiss_settings();
        Ok(())
    });

    close_settings_window(&app);
    CommandResult::ok(())
}
