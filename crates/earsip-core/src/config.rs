//! Persisted application settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Environment variable that overrides the stored API base URL.
pub const API_URL_ENV: &str = "EARSIP_API_URL";

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/";

/// Records per page used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const MAX_PAGE_SIZE: u32 = 100;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// REST service base URL.
    pub api_base_url: String,
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Records per list page.
    pub page_size: u32,
    /// Base URL from the environment for this run only; never written back.
    #[serde(skip)]
    api_override: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            theme_mode: ThemeMode::Light,
            page_size: DEFAULT_PAGE_SIZE,
            api_override: None,
        }
    }
}

/// Serde helpers for `ThemeMode`; unknown values read as dark.
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "light" => Ok(ThemeMode::Light),
            _ => Ok(ThemeMode::Dark),
        }
    }
}

impl AppSettings {
    /// Default location: `<config dir>/earsip/settings.json`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("earsip").join("settings.json"))
    }

    /// Loads settings from the default location, then applies the
    /// environment override. Missing or unreadable files yield defaults.
    #[must_use]
    pub fn load() -> Self {
        let mut settings = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        };
        settings.apply_api_override(std::env::var(API_URL_ENV).ok());
        settings
    }

    /// Reads settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Writes settings to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no config directory or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()
            .ok_or_else(|| Error::Config("no configuration directory".to_string()))?;
        self.save_to(&path)
    }

    /// Writes settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Layers a non-blank override over the stored base URL.
    ///
    /// The stored `api_base_url` is left untouched, so saving keeps it.
    pub fn apply_api_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            debug!("API base URL overridden by {}", API_URL_ENV);
            self.api_override = Some(url.trim().to_string());
        }
    }

    /// Base URL in effect: the override if set, else the stored one.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_override.as_deref().unwrap_or(&self.api_base_url)
    }

    /// Page size clamped to a usable range.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("earsip-core-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
        assert_eq!(settings.page_size(), 10);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_file("nested/settings.json");
        let settings = AppSettings {
            api_base_url: "https://arsip.example.org/api/".to_string(),
            theme_mode: ThemeMode::Dark,
            page_size: 25,
            ..AppSettings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), settings);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode":"dark"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_api_override() {
        let mut settings = AppSettings::default();
        settings.apply_api_override(Some("   ".to_string()));
        assert_eq!(settings.api_url(), DEFAULT_API_URL);
        settings.apply_api_override(Some(" http://10.0.0.2:5000/api ".to_string()));
        assert_eq!(settings.api_url(), "http://10.0.0.2:5000/api");
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_override_is_not_saved() {
        let path = temp_file("override/settings.json");
        let stored = AppSettings {
            api_base_url: "http://stored/api/".to_string(),
            ..AppSettings::default()
        };
        stored.save_to(&path).unwrap();

        let mut settings = AppSettings::load_from(&path).unwrap();
        settings.apply_api_override(Some("http://temp-override/api/".to_string()));
        assert_eq!(settings.api_url(), "http://temp-override/api/");
        settings.theme_mode = settings.theme_mode.toggled();
        settings.save_to(&path).unwrap();

        let reloaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(reloaded.api_base_url, "http://stored/api/");
        assert_eq!(reloaded.api_url(), "http://stored/api/");
        assert_eq!(reloaded.theme_mode, ThemeMode::Dark);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_page_size_clamped() {
        let settings = AppSettings {
            page_size: 0,
            ..AppSettings::default()
        };
        assert_eq!(settings.page_size(), 1);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let path = temp_file("corrupt.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(Error::Serde(_))));
        std::fs::remove_file(&path).ok();
    }
}
