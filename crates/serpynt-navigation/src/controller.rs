//! Navigation controller

use serpynt_tabs::{TabError, TabSession};
use url::Url;

use crate::action::NavAction;
use crate::input::normalize_input;
use crate::Result;

pub struct NavigationController {
    /// Target of the Home action, fixed for the lifetime of the window
    homepage: Option<Url>,
}

impl NavigationController {
    pub fn new(homepage: Option<Url>) -> Self {
        Self { homepage }
    }

    pub fn homepage(&self) -> Option<&Url> {
        self.homepage.as_ref()
    }

    pub fn go_back(&self, session: &TabSession) -> Result<()> {
        Ok(session.active_view()?.back()?)
    }

    pub fn go_forward(&self, session: &TabSession) -> Result<()> {
        Ok(session.active_view()?.forward()?)
    }

    pub fn reload(&self, session: &TabSession) -> Result<()> {
        Ok(session.active_view()?.reload()?)
    }

    pub fn stop(&self, session: &TabSession) -> Result<()> {
        Ok(session.active_view()?.stop()?)
    }

    pub fn go_home(&self, session: &mut TabSession) -> Result<()> {
        let Some(homepage) = &self.homepage else {
            tracing::warn!("Home requested but the configured homepage is not a URL");
            return Err(TabError::NoHomepage.into());
        };

        session.navigate_active(homepage)?;
        tracing::debug!(url = %homepage, "Navigated home");
        Ok(())
    }

    /// Submit URL bar text to the active tab.
    pub fn navigate_to(&self, session: &mut TabSession, text: &str) -> Result<Url> {
        let url = normalize_input(text)?;
        session.navigate_active(&url)?;
        tracing::info!(input = %text, url = %url, "Navigating active tab");
        Ok(url)
    }

    /// Run a toolbar action.
    pub fn perform(&self, session: &mut TabSession, action: NavAction) -> Result<()> {
        match action {
            NavAction::Back => self.go_back(session),
            NavAction::Forward => self.go_forward(session),
            NavAction::Reload => self.reload(session),
            NavAction::Home => self.go_home(session),
            NavAction::Stop => self.stop(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serpynt_tabs::testing::{RecordingFactory, ViewCall};
    use crate::NavigationError;
    use serpynt_tabs::BLANK_LABEL;

    fn setup() -> (NavigationController, TabSession, RecordingFactory) {
        let home = Url::parse("https://duckduckgo.com/").unwrap();
        let controller = NavigationController::new(Some(home.clone()));
        let session = TabSession::new(Some(home), "TestAgent/1.0");
        (controller, session, RecordingFactory::new())
    }

    #[test]
    fn test_navigate_to_inserts_scheme() {
        let (controller, mut session, factory) = setup();
        session.open_tab(&factory, None, "Homepage").unwrap();

        let url = controller.navigate_to(&mut session, "example.com").unwrap();

        assert_eq!(url.as_str(), "http://example.com/");
        assert_eq!(factory.last_call(0), Some(ViewCall::Navigate("http://example.com/".to_string())));
        assert_eq!(session.url_bar(), "http://example.com/");
    }

    #[test]
    fn test_actions_target_active_tab_only() {
        let (controller, mut session, factory) = setup();
        session.open_tab(&factory, None, "Homepage").unwrap();
        session.open_tab(&factory, None, BLANK_LABEL).unwrap();
        session.activate(0).unwrap();

        for action in [NavAction::Back, NavAction::Forward, NavAction::Reload, NavAction::Stop] {
            controller.perform(&mut session, action).unwrap();
        }

        let first = factory.calls(0);
        assert!(first.ends_with(&[
            ViewCall::Back,
            ViewCall::Forward,
            ViewCall::Reload,
            ViewCall::Stop
        ]));
        assert!(!factory.calls(1).contains(&ViewCall::Reload));
    }

    #[test]
    fn test_go_home() {
        let (controller, mut session, factory) = setup();
        session
            .open_tab(&factory, Some(Url::parse("https://example.com/").unwrap()), BLANK_LABEL)
            .unwrap();

        controller.perform(&mut session, NavAction::Home).unwrap();

        assert_eq!(
            factory.navigations(0),
            vec!["https://example.com/", "https://duckduckgo.com/"]
        );
        assert_eq!(session.url_bar(), "https://duckduckgo.com/");
    }

    #[test]
    fn test_go_home_without_usable_homepage() {
        let controller = NavigationController::new(None);
        let mut session = TabSession::new(None, "TestAgent/1.0");
        let factory = RecordingFactory::new();
        session
            .open_tab(&factory, Some(Url::parse("https://example.com/").unwrap()), BLANK_LABEL)
            .unwrap();

        let result = controller.perform(&mut session, NavAction::Home);

        assert!(matches!(result, Err(NavigationError::Tab(TabError::NoHomepage))));
        assert_eq!(factory.navigations(0), vec!["https://example.com/"]);
    }

    #[test]
    fn test_invalid_input_not_dispatched() {
        let (controller, mut session, factory) = setup();
        session.open_tab(&factory, None, "Homepage").unwrap();

        assert!(controller.navigate_to(&mut session, "   ").is_err());
        assert_eq!(factory.navigations(0).len(), 1);
    }

    #[test]
    fn test_no_tabs_is_error() {
        let (controller, mut session, _factory) = setup();
        assert!(controller.perform(&mut session, NavAction::Reload).is_err());
    }
}
