//! Notification settings model and on-disk store.
//!
//! Settings live in a single JSON file under the platform config directory.
//! The store is synchronous and write-through: every mutation persists
//! immediately, and a failed write is logged rather than surfaced.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";
const APP_DIR: &str = "beacon";

/// Per-friend notification preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendPreference {
    pub enabled: bool,
    pub use_override: bool,
    pub template_override: Option<String>,
    pub sound_override: Option<String>,
}

impl Default for FriendPreference {
    fn default() -> Self {
        Self {
            enabled: true,
            use_override: false,
            template_override: None,
            sound_override: None,
        }
    }
}

/// All persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub default_template: String,
    pub default_sound: Option<String>,
    pub friend_prefs: HashMap<String, FriendPreference>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_template: String::from("{name} is online"),
            default_sound: None,
            friend_prefs: HashMap::new(),
        }
    }
}

impl AppSettings {
    /// Whether presence notifications are enabled for a friend.
    /// Friends without an explicit preference default to enabled.
    pub fn notifications_enabled(&self, friend_id: &str) -> bool {
        self.friend_prefs
            .get(friend_id)
            .map(|p| p.enabled)
            .unwrap_or(true)
    }

    /// The message template to use for a friend: the per-friend override
    /// when one is set and active, else the global default.
    pub fn effective_template(&self, friend_id: &str) -> &str {
        self.friend_prefs
            .get(friend_id)
            .filter(|p| p.use_override)
            .and_then(|p| p.template_override.as_deref())
            .unwrap_or(&self.default_template)
    }

    /// The notification sound for a friend, if any.
    pub fn effective_sound(&self, friend_id: &str) -> Option<&str> {
        self.friend_prefs
            .get(friend_id)
            .filter(|p| p.use_override)
            .and_then(|p| p.sound_override.as_deref())
            .or(self.default_sound.as_deref())
    }
}

/// Write-through settings store backed by a JSON file.
pub struct SettingsStore {
    path: PathBuf,
    state: AppSettings,
}

impl SettingsStore {
    /// Loads settings from the default platform location, falling back to
    /// defaults when the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(default_settings_path())
    }

    /// Loads settings from an explicit path (used by tests).
    pub fn load_from(path: PathBuf) -> Self {
        let state = read_settings(&path);
        Self { path, state }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> &AppSettings {
        &self.state
    }

    /// Applies a mutation and persists the result.
    pub fn update(&mut self, mutate: impl FnOnce(&mut AppSettings)) {
        mutate(&mut self.state);
        if let Err(err) = write_settings(&self.path, &self.state) {
            log::warn!("failed to save settings to {}: {err}", self.path.display());
        }
    }

    /// Replaces the settings wholesale and persists.
    pub fn set(&mut self, settings: AppSettings) {
        self.state = settings;
        if let Err(err) = write_settings(&self.path, &self.state) {
            log::warn!("failed to save settings to {}: {err}", self.path.display());
        }
    }
}

fn default_settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| std::env::temp_dir().join(APP_DIR));
    base.join(APP_DIR).join(SETTINGS_FILE)
}

fn read_settings(path: &Path) -> AppSettings {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppSettings::default();
    };
    serde_json::from_str(&contents).unwrap_or_default()
}

fn write_settings(path: &Path, settings: &AppSettings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings).unwrap_or_else(|_| "{}".to_string());
    std::fs::write(path, json)
}
