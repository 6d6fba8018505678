//! Navigation toolbar and URL bar commands

use serde::Serialize;
use serpynt_core::{NavAction, SessionSnapshot};
use tauri::AppHandle;

use super::apply;
use super::tabs::CommandResult;

#[derive(Debug, Serialize)]
pub struct ToolbarAction {
    pub name: &'static str,
    pub label: &'static str,
    pub status_tip: &'static str,
}

impl From<NavAction> for ToolbarAction {
    fn from(action: NavAction) -> Self {
        Self {
            name: action.as_str(),
            label: action.label(),
            status_tip: action.status_tip(),
        }
    }
}

#[tauri::command]
pub fn get_toolbar() -> CommandResult<Vec<ToolbarAction>> {
    CommandResult::ok(NavAction::ALL.into_iter().map(ToolbarAction::from).collect())
}

#[tauri::command]
pub async fn nav_action(app: AppHandle, action: String) -> CommandResult<SessionSnapshot> {
    let action: NavAction = match action.parse() {
        Ok(a) => a,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    apply(&app, |browser| browser.perform(action))
}

#[tauri::command]
pub async fn navigate_to(app: AppHandle, text: String) -> CommandResult<SessionSnapshot> {
    apply(&app, |browser| {
        browser.navigate_to(&text)?;
        Ok(())
    })
}
