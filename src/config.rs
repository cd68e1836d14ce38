use crate::error::{ConfigError, ConfigResult};
use crate::navigation::FallbackConfig;
use crate::state::UserProfile;
use crate::style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "BOOKSTALL_CONFIG";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub ui: UiConfig,
    pub navigation: FallbackConfig,
    pub contact: ContactConfig,
    /// Signed-in user as reported by the identity provider
    pub profile: Option<UserProfile>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the dashboard sidebar (in pixels)
    pub sidebar_width: f32,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Route shown at startup
    pub start_route: String,
    /// Seconds a notification stays on screen
    pub toast_timeout_secs: u64,
}

/// Shop contact details shown on the contact page and in the footer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub hours: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            sidebar_width: style::SIDEBAR_DEFAULT,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_route: "/".to_string(),
            toast_timeout_secs: style::MESSAGE_TIMEOUT_SECS,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@bookstall.example".to_string(),
            phone: "+1 555 0100".to_string(),
            address: "12 Paper Lane, Springfield".to_string(),
            hours: "Mon-Fri 9:00-17:00".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            panel: PanelConfig::default(),
            ui: UiConfig::default(),
            navigation: FallbackConfig::default(),
            contact: ContactConfig::default(),
            profile: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("", "", "bookstall")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("No config directory, using default configuration");
            return Config::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> ConfigResult<()> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> ConfigResult<()> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
            tracing::info!(path = %path.display(), "wrote default config");
        }
        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        !self.theme.mode.eq_ignore_ascii_case("light")
    }

    /// Keep layout values inside the ranges the UI can render.
    pub fn sanitized(mut self) -> Self {
        self.panel.sidebar_width = self
            .panel
            .sidebar_width
            .clamp(style::SIDEBAR_MIN, style::SIDEBAR_MAX);
        if self.navigation.fallback_route.is_empty() {
            self.navigation = FallbackConfig::default();
        }
        if self.ui.start_route.is_empty() {
            self.ui.start_route = self.navigation.fallback_route.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.panel.sidebar_width, style::SIDEBAR_DEFAULT);
        assert_eq!(config.navigation.fallback_route, "/");
        assert_eq!(config.ui.start_route, "/");
        assert!(config.profile.is_none());
        assert!(config.is_dark());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [navigation]
            fallback_route = "/catalog"

            [profile]
            display_name = "Ada"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.navigation.fallback_route, "/catalog");
        assert_eq!(config.contact, ContactConfig::default());
        let profile = config.profile.expect("profile section");
        assert_eq!(profile.display_name.as_deref(), Some("Ada"));
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.mode = "light".into();
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert!(!loaded.is_dark());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = 3").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempdir().expect("tempdir");
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_sanitized() {
        let mut config = Config::default();
        config.panel.sidebar_width = 5000.0;
        config.navigation.fallback_route.clear();
        config.ui.start_route.clear();

        let config = config.sanitized();
        assert_eq!(config.panel.sidebar_width, style::SIDEBAR_MAX);
        assert_eq!(config.navigation.fallback_route, "/");
        assert_eq!(config.ui.start_route, "/");
    }
}
