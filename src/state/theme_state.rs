//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming,
//! including the theme manager and the currently selected theme.

use beacon::ThemeManager;

/// State related to visual theme and styling.
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Creates a new theme state with a specific theme.
    pub fn with_theme(theme_name: String) -> Self {
        let mut state = Self::new();
        state.set_theme(theme_name);
        state
    }

    /// Returns the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the current theme name.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Sets the current theme, falling back to the default for unknown
    /// names (stale persisted preferences).
    pub fn set_theme(&mut self, theme_name: String) {
        if self.theme_manager.set_current_theme(&theme_name).is_ok() {
            self.current_theme_name = theme_name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_keeps_current() {
        let mut state = ThemeState::new();
        state.set_theme("NotATheme".to_string());
        assert_eq!(state.current_theme_name(), "Dark");
    }

    #[test]
    fn test_known_theme_switches() {
        let mut state = ThemeState::new();
        state.set_theme("Dracula".to_string());
        assert_eq!(state.current_theme_name(), "Dracula");
    }
}
