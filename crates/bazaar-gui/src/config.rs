//! Persisted application settings.
//!
//! Stored as TOML in the platform config directory. The backend address can
//! also be overridden per-launch through `BAZAAR_API_URL`.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured backend address.
const API_URL_ENV: &str = "BAZAAR_API_URL";

/// Application settings (persisted).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend origin. Resource paths (`/api/...`) are appended to this.
    pub api_base_url: String,
    /// Whether the window opens with the dark theme.
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:4000".to_string(),
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults on any problem.
    /// The env override is applied last so it always wins.
    pub fn load() -> Self {
        let mut settings: Settings = Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default();

        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.is_empty()
        {
            settings.api_base_url = url;
        }
        settings
    }

    /// Persist settings. Failures are logged, not fatal.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(dir) = path.parent()
            && let Err(e) = fs::create_dir_all(dir)
        {
            tracing::warn!(error = %e, "could not create config directory");
            return;
        }
        match toml::to_string_pretty(self) {
            Ok(raw) => {
                if let Err(e) = fs::write(&path, raw) {
                    tracing::warn!(error = %e, path = %path.display(), "could not save settings");
                }
            }
            Err(e) => tracing::warn!(error = %e, "could not serialize settings"),
        }
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "bazaar", "bazaar-admin-studio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:4000");
        assert!(!settings.dark_mode);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings {
            api_base_url: "https://shop.example.com".to_string(),
            dark_mode: true,
        };
        let raw = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&raw).unwrap();
        assert_eq!(back.api_base_url, settings.api_base_url);
        assert!(back.dark_mode);
    }
}
