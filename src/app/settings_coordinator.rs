//! Generic window-settings persistence coordination.
//!
//! Provides a reusable API for persisting small UI settings (filter
//! toggles, window preferences) to eframe storage as JSON strings. The
//! notification settings proper live in [`beacon::SettingsStore`]; this
//! coordinator only covers view state that belongs to the window.

use serde::{Deserialize, Serialize};

/// Coordinates generic view-settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "show_offline", &false);

        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "show_offline", true);
        assert!(!loaded);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = MockStorage::new();
        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "missing", true);
        assert!(loaded);
    }

    #[test]
    fn test_garbage_value_uses_default() {
        let mut storage = MockStorage::new();
        storage.set_string("key", "not json at all {{".to_string());
        let loaded: u32 = SettingsCoordinator::load_setting_or(Some(&storage), "key", 7);
        assert_eq!(loaded, 7);
    }
}
