//! Toolbar actions
//!
//! The navigation toolbar, left to right:
//! - `Back`: back to previous page
//! - `Forward`: forward to next page
//! - `Reload`: reload page
//! - `Home`: go home
//! - `Stop`: stop loading current page

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    Back,
    Forward,
    Reload,
    Home,
    Stop,
}

impl NavAction {
    /// Toolbar order
    pub const ALL: [NavAction; 5] = [
        NavAction::Back,
        NavAction::Forward,
        NavAction::Reload,
        NavAction::Home,
        NavAction::Stop,
    ];

    /// Button text
    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Back => "Back",
            NavAction::Forward => "Forward",
            NavAction::Reload => "Reload",
            NavAction::Home => "Home",
            NavAction::Stop => "Stop",
        }
    }

    /// Shown in the status line while the button is hovered
    pub fn status_tip(&self) -> &'static str {
        match self {
            NavAction::Back => "Back to previous page",
            NavAction::Forward => "Forward to next page",
            NavAction::Reload => "Reload page",
            NavAction::Home => "Go home",
            NavAction::Stop => "Stop loading current page",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::Back => "back",
            NavAction::Forward => "forward",
            NavAction::Reload => "reload",
            NavAction::Home => "home",
            NavAction::Stop => "stop",
        }
    }
}

impl std::fmt::Display for NavAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NavAction {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "back" => Ok(NavAction::Back),
            "forward" => Ok(NavAction::Forward),
            "reload" => Ok(NavAction::Reload),
            "home" => Ok(NavAction::Home),
            "stop" => Ok(NavAction::Stop),
            _ => Err(NavigationError::UnknownAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for action in NavAction::ALL {
            assert_eq!(action.as_str().parse::<NavAction>().unwrap(), action);
            assert_eq!(action.label().parse::<NavAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_action() {
        assert!(matches!(
            "settings".parse::<NavAction>(),
            Err(NavigationError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_status_tips() {
        assert_eq!(NavAction::Home.status_tip(), "Go home");
        assert_eq!(NavAction::Stop.status_tip(), "Stop loading current page");
    }
}
