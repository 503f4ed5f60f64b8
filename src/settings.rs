//! Persistent settings for the dashboard app.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// All persistable settings. Every field carries a serde default so old
/// settings files keep loading after new fields are added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Analysis backend address.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Report generation runs an LLM server-side and takes much longer.
    #[serde(default = "default_report_timeout_secs")]
    pub report_timeout_secs: u64,

    #[serde(default)]
    pub auto_refresh_enabled: bool,

    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_report_timeout_secs() -> u64 {
    120
}

fn default_refresh_interval_secs() -> u64 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            report_timeout_secs: default_report_timeout_secs(),
            auto_refresh_enabled: false,
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("tbm-dashboard");
            p.push("settings.json");
            p
        })
    }

    /// Load settings from disk, returning defaults if the file doesn't
    /// exist or is invalid.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("could not determine config directory, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    info!("loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("failed to parse settings file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist yet, that's fine
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            warn!("could not determine config directory, settings not saved");
            return;
        };

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!("failed to write settings file: {}", e);
                } else {
                    info!("saved settings to {:?}", path);
                }
            }
            Err(e) => {
                warn!("failed to serialize settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.request_timeout_secs, 60);
        assert!(!settings.auto_refresh_enabled);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let mut settings = Settings::default();
        settings.api_base_url = "http://10.0.0.5:9000".to_string();
        settings.auto_refresh_enabled = true;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.api_base_url, "http://10.0.0.5:9000");
        assert!(back.auto_refresh_enabled);
    }
}
