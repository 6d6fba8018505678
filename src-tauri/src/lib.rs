//! SerPynt Browser - Tauri Application
//!
//! One main window: the browser chrome (tab bar, toolbar, URL bar) in a UI
//! webview across the top, and one content webview per tab beneath it.

mod commands;
mod state;

use commands::settings::{close_settings_window, release_main_window, DialogWindow};
use commands::webview::{publish, spawn_event_pump, TauriViewFactory};
use commands::{ui_webview_label, MAIN_WINDOW_LABEL};
use serpynt_core::WINDOW_TITLE_BASE;
use state::AppState;
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{LogicalPosition, LogicalSize, Manager, WebviewUrl, WindowEvent};

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 800.0;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    serpynt_core::init_logging();

    tauri::Builder::default()
        .setup(|app| {
            // Bootstrap user data and load settings
            let (state, inbox) = AppState::new();

            let window = WindowBuilder::new(app, MAIN_WINDOW_LABEL)
                .title(WINDOW_TITLE_BASE)
                .inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
                .min_inner_size(640.0, 480.0)
                .center()
                .build()?;

            let ui_webview = WebviewBuilder::new(
                ui_webview_label(MAIN_WINDOW_LABEL),
                WebviewUrl::App("index.html".into()),
            )
            .auto_resize();

            window.add_child(
                ui_webview,
                LogicalPosition::new(0.0, 0.0),
                LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            )?;

            // Startup tab at the homepage
            let factory = TauriViewFactory::new(&window, state.events());
            state.with_browser_mut(|browser| browser.initialize(&factory).map(|_| ()))?;
            let snapshot = state.snapshot();

            app.manage(state);
            spawn_event_pump(app.handle().clone(), inbox);
            publish(app.handle(), &snapshot);

            tracing::info!("SerPynt Browser started");

            Ok(())
        })
        .on_window_event(|window, event| {
            if !matches!(event, WindowEvent::Destroyed) {
                return;
            }

            let app = window.app_handle().clone();
            match DialogWindow::from_label(window.label()) {
                Some(DialogWindow::Main) => close_settings_window(&app),
                Some(DialogWindow::Settings) => {
                    release_main_window(&app);
                    // Closed from the title bar: treat as dismiss, off the UI thread
                    tauri::async_runtime::spawn(async move {
                        if let Some(state) = app.try_state::<AppState>() {
                            let _ = state.with_browser_mut(|browser| {
                                browser.dismiss_settings();
                                Ok(())
                            });
                        }
                    });
                }
                None => {}
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Tab commands
            commands::tabs::get_shell,
            commands::tabs::open_tab,
            commands::tabs::close_tab,
            commands::tabs::activate_tab,
            commands::tabs::activate_empty_area,
            // Navigation commands
            commands::navigation::get_toolbar,
            commands::navigation::nav_action,
            commands::navigation::navigate_to,
            // Settings commands
            commands::settings::open_settings,
            commands::settings::get_settings_form,
            commands::settings::save_settings,
            commands::settings::dismiss_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running SerPynt browser");
}
