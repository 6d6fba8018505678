//! Browser configuration

use serpynt_navigation::normalize_input;
use serpynt_storage::{SettingsStore, SETTINGS_FILE};
use std::path::PathBuf;
use url::Url;

/// Settings key of the homepage
pub const KEY_DEFAULT_PAGE: &str = "default_page";
/// Settings key of the user agent string
pub const KEY_USER_AGENT: &str = "user_agent";

pub const DEFAULT_PAGE: &str = "https://duckduckgo.com/";
/// Where the startup tab opens when the configured homepage is not a URL
pub const BLANK_PAGE: &str = "about:blank";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) QtWebEngine/5.15.2 Chrome/83.0.4103.122 Safari/537.36";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding every file the browser writes
    pub user_data_dir: PathBuf,
    /// Path to the settings file
    pub settings_path: PathBuf,
}

impl Config {
    pub fn new(user_data_dir: PathBuf) -> Self {
        Self {
            settings_path: user_data_dir.join(SETTINGS_FILE),
            user_data_dir,
        }
    }

    /// `./userdata`, relative to the working directory
    pub fn data_dir() -> PathBuf {
        PathBuf::from(".").join("userdata")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

/// Homepage and user agent as they were when the browser started.
///
/// Captured once; later edits in the settings dialog only apply after a
/// restart. A homepage that is not a URL is kept as text and only fails when
/// something navigates to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Homepage text exactly as configured
    pub configured_homepage: String,
    /// The configured homepage as a URL, if it is one
    pub homepage: Option<Url>,
    pub user_agent: String,
}

impl LaunchSettings {
    pub fn from_store(store: &SettingsStore) -> Self {
        let configured_homepage = store.get(KEY_DEFAULT_PAGE, DEFAULT_PAGE);
        let homepage = match normalize_input(&configured_homepage) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(
                    homepage = %configured_homepage,
                    error = %e,
                    "Configured homepage is not a URL"
                );
                None
            }
        };

        Self {
            configured_homepage,
            homepage,
            user_agent: store.get(KEY_USER_AGENT, DEFAULT_USER_AGENT),
        }
    }
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            configured_homepage: DEFAULT_PAGE.to_string(),
            homepage: Url::parse(DEFAULT_PAGE).ok(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let config = Config::new(PathBuf::from("/tmp/serpynt"));
        assert_eq!(config.settings_path, PathBuf::from("/tmp/serpynt/settings.json"));
        assert!(Config::default().user_data_dir.ends_with("userdata"));
    }

    #[test]
    fn test_launch_defaults_from_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SettingsStore::load(tmp.path().join("settings.json"));

        let launch = LaunchSettings::from_store(&store);
        assert_eq!(launch, LaunchSettings::default());
        assert_eq!(launch.homepage.unwrap().as_str(), DEFAULT_PAGE);
    }

    #[test]
    fn test_launch_reads_store() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::load(tmp.path().join("settings.json"));
        store.set(KEY_DEFAULT_PAGE, "example.org");
        store.set(KEY_USER_AGENT, "TestAgent/1.0");

        let launch = LaunchSettings::from_store(&store);
        assert_eq!(launch.homepage.unwrap().as_str(), "http://example.org/");
        assert_eq!(launch.user_agent, "TestAgent/1.0");
    }

    #[test]
    fn test_launch_keeps_unusable_homepage_as_text() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::load(tmp.path().join("settings.json"));
        store.set(KEY_DEFAULT_PAGE, "not a url");

        let launch = LaunchSettings::from_store(&store);
        assert_eq!(launch.homepage, None);
        assert_eq!(launch.configured_homepage, "not a url");
    }
}
