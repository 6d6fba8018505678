//! Main browser state container
//!
//! All shell state flows through here; engine views only render.

use serpynt_navigation::{normalize_input, NavAction, NavigationController};
use serpynt_storage::{ensure_user_data, SettingsStore};
use serpynt_tabs::{EngineEvent, SessionSnapshot, TabId, TabSession, ViewFactory, BLANK_LABEL};
use url::Url;

use crate::config::{Config, LaunchSettings, BLANK_PAGE};
use crate::dialog::{SettingsDialog, SettingsForm};
use crate::Result;

/// Label of the tab opened at startup
const INITIAL_TAB_LABEL: &str = "Homepage";

pub struct Browser {
    /// Configuration
    config: Config,
    /// Persisted settings
    settings: SettingsStore,
    /// Homepage and user agent this run started with
    launch: LaunchSettings,
    /// Tabs of the window
    session: TabSession,
    /// Toolbar and URL bar handling
    navigation: NavigationController,
    /// Settings dialog state
    dialog: SettingsDialog,
}

impl Browser {
    /// Bootstrap the user-data directory and load settings.
    ///
    /// Never fails: a directory or file that cannot be created or read is
    /// logged and the browser runs on defaults.
    pub fn new(config: Config) -> Self {
        if let Err(e) = ensure_user_data(&config.user_data_dir) {
            tracing::warn!(
                path = %config.user_data_dir.display(),
                error = %e,
                "Failed to prepare user data directory"
            );
        }

        let settings = SettingsStore::load(&config.settings_path);
        let launch = LaunchSettings::from_store(&settings);

        tracing::info!(
            homepage = %launch.configured_homepage,
            user_agent = %launch.user_agent,
            "Loaded launch settings"
        );

        Self {
            session: TabSession::new(launch.homepage.clone(), launch.user_agent.clone()),
            navigation: NavigationController::new(launch.homepage.clone()),
            config,
            settings,
            launch,
            dialog: SettingsDialog::new(),
        }
    }

    /// Open the startup tab at the homepage, or on a blank page when the
    /// homepage is not a URL.
    pub fn initialize(&mut self, factory: &dyn ViewFactory) -> Result<TabId> {
        let start = match self.launch.homepage {
            Some(_) => None,
            None => {
                tracing::warn!(
                    homepage = %self.launch.configured_homepage,
                    "Cannot open homepage, starting on a blank page"
                );
                Url::parse(BLANK_PAGE).ok()
            }
        };

        let id = self.session.open_tab(factory, start, INITIAL_TAB_LABEL)?;
        tracing::info!("Browser initialized");
        Ok(id)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn launch(&self) -> &LaunchSettings {
        &self.launch
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn session(&self) -> &TabSession {
        &self.session
    }

    pub fn dialog(&self) -> &SettingsDialog {
        &self.dialog
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    // === Tab operations ===

    /// Open a tab. `url` is URL bar style text; `None` means the homepage.
    pub fn open_tab(
        &mut self,
        factory: &dyn ViewFactory,
        url: Option<&str>,
        label: Option<&str>,
    ) -> Result<TabId> {
        let url: Option<Url> = url.map(normalize_input).transpose()?;
        Ok(self
            .session
            .open_tab(factory, url, label.unwrap_or(BLANK_LABEL))?)
    }

    pub fn close_tab(&mut self, index: usize) -> Result<bool> {
        Ok(self.session.close_tab(index)?)
    }

    pub fn activate_tab(&mut self, index: usize) -> Result<()> {
        Ok(self.session.activate(index)?)
    }

    pub fn activate_empty_area(&mut self, factory: &dyn ViewFactory) -> Result<TabId> {
        Ok(self.session.activate_empty_area(factory)?)
    }

    pub fn handle_event(&mut self, event: EngineEvent) -> bool {
        self.session.handle_event(event)
    }

    // === Navigation ===

    pub fn perform(&mut self, action: NavAction) -> Result<()> {
        Ok(self.navigation.perform(&mut self.session, action)?)
    }

    pub fn navigate_to(&mut self, text: &str) -> Result<Url> {
        Ok(self.navigation.navigate_to(&mut self.session, text)?)
    }

    // === Settings dialog ===

    pub fn open_settings(&mut self) -> SettingsForm {
        self.dialog.open(&self.settings)
    }

    pub fn save_settings(&mut self, form: SettingsForm) -> Result<()> {
        self.dialog.save(&mut self.settings, form)
    }

    pub fn dismiss_settings(&mut self) {
        self.dialog.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PAGE, KEY_DEFAULT_PAGE, KEY_USER_AGENT};
    use serpynt_tabs::testing::RecordingFactory;
    use std::fs;

    fn browser_in(tmp: &tempfile::TempDir) -> Browser {
        Browser::new(Config::new(tmp.path().join("userdata")))
    }

    #[test]
    fn test_first_run_bootstraps_and_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let browser = browser_in(&tmp);

        let settings_path = tmp.path().join("userdata").join("settings.json");
        assert!(settings_path.is_file());
        assert_eq!(fs::read_to_string(&settings_path).unwrap(), "");
        assert_eq!(
            browser.settings().get(KEY_DEFAULT_PAGE, "https://duckduckgo.com/"),
            "https://duckduckgo.com/"
        );
        assert_eq!(browser.launch().homepage.as_ref().unwrap().as_str(), DEFAULT_PAGE);
    }

    #[test]
    fn test_initialize_opens_homepage_tab() {
        let tmp = tempfile::tempdir().unwrap();
        let factory = RecordingFactory::new();
        let mut browser = browser_in(&tmp);

        browser.initialize(&factory).unwrap();

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.tabs.len(), 1);
        assert_eq!(snapshot.tabs[0].label, "Homepage");
        assert_eq!(snapshot.url_bar, DEFAULT_PAGE);
        assert_eq!(factory.navigations(0), vec![DEFAULT_PAGE]);
    }

    #[test]
    fn test_unusable_homepage_fails_when_used() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("userdata");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("settings.json"), r#"{"default_page": "not a url"}"#).unwrap();
        let factory = RecordingFactory::new();
        let mut browser = browser_in(&tmp);

        browser.initialize(&factory).unwrap();
        assert_eq!(factory.navigations(0), vec![BLANK_PAGE]);

        assert!(browser.perform(NavAction::Home).is_err());
        assert!(browser.activate_empty_area(&factory).is_err());
        assert_eq!(browser.session().len(), 1);
        assert_eq!(browser.settings().get(KEY_DEFAULT_PAGE, ""), "not a url");
    }

    #[test]
    fn test_open_tab_normalizes_url() {
        let tmp = tempfile::tempdir().unwrap();
        let factory = RecordingFactory::new();
        let mut browser = browser_in(&tmp);
        browser.initialize(&factory).unwrap();

        browser.open_tab(&factory, Some("example.com"), None).unwrap();

        assert_eq!(factory.navigations(1), vec!["http://example.com/"]);
        assert_eq!(browser.session().active_tab().unwrap().label(), BLANK_LABEL);
    }

    #[test]
    fn test_saved_settings_apply_on_next_start_only() {
        let tmp = tempfile::tempdir().unwrap();
        let factory = RecordingFactory::new();
        let mut browser = browser_in(&tmp);
        browser.initialize(&factory).unwrap();

        let mut form = browser.open_settings();
        form.default_page = "https://example.org/".to_string();
        form.user_agent = "TestAgent/1.0".to_string();
        browser.save_settings(form).unwrap();

        // Running session keeps its launch settings
        browser.perform(NavAction::Home).unwrap();
        assert_eq!(browser.snapshot().url_bar, DEFAULT_PAGE);
        browser.activate_empty_area(&factory).unwrap();
        assert_eq!(factory.spec(1).user_agent, browser.launch().user_agent);

        let restarted = browser_in(&tmp);
        assert_eq!(
            restarted.launch().homepage.as_ref().unwrap().as_str(),
            "https://example.org/"
        );
        assert_eq!(restarted.launch().user_agent, "TestAgent/1.0");
        assert_eq!(restarted.settings().get(KEY_USER_AGENT, ""), "TestAgent/1.0");
    }

    #[test]
    fn test_unknown_keys_survive_dialog_save() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("userdata");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("settings.json"), r#"{"theme": "dark"}"#).unwrap();

        let mut browser = browser_in(&tmp);
        let form = browser.open_settings();
        browser.save_settings(form).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("settings.json")).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw["default_page"], DEFAULT_PAGE);
    }

    #[test]
    fn test_three_tabs_close_middle() {
        let tmp = tempfile::tempdir().unwrap();
        let factory = RecordingFactory::new();
        let mut browser = browser_in(&tmp);
        browser.initialize(&factory).unwrap();
        browser.open_tab(&factory, Some("https://b.example/"), None).unwrap();
        let third = browser.open_tab(&factory, Some("https://c.example/"), None).unwrap();

        browser.activate_tab(1).unwrap();
        assert!(browser.close_tab(1).unwrap());

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.tabs.len(), 2);
        assert_eq!(snapshot.active_index, 1);
        assert_eq!(snapshot.tabs[1].id, third);
        assert_eq!(snapshot.url_bar, "https://c.example/");
    }

    #[test]
    fn test_navigate_to_updates_url_bar() {
        let tmp = tempfile::tempdir().unwrap();
        let factory = RecordingFactory::new();
        let mut browser = browser_in(&tmp);
        browser.initialize(&factory).unwrap();

        let url = browser.navigate_to("example.com").unwrap();

        assert_eq!(url.as_str(), "http://example.com/");
        assert_eq!(browser.snapshot().url_bar, "http://example.com/");
    }
}
