//! Theme support module for the Beacon GUI
//!
//! This module provides a theming system with color schemes for the friend
//! grid. It includes built-in themes (Light, Dark, Dracula) and a
//! centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use beacon::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula card background: {:?}", dracula.colors.card_background);
//! ```

use crate::model::UserStatus;
use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Card colors
    pub card_background: Color32,
    pub card_hover: Color32,
    pub card_border: Color32,

    // Interactive colors
    pub selection: Color32,
    pub selection_stroke: Color32,
    pub accent: Color32,
    pub border: Color32,

    // Floating surfaces (toasts, bulk-actions bar)
    pub toast_background: Color32,

    // Presence status colors
    pub status_join_me: Color32,
    pub status_active: Color32,
    pub status_ask_me: Color32,
    pub status_busy: Color32,
    pub status_offline: Color32,
}

impl ThemeColors {
    /// The dot/border color for a presence status.
    pub fn status_color(&self, status: UserStatus) -> Color32 {
        match status {
            UserStatus::JoinMe => self.status_join_me,
            UserStatus::Active => self.status_active,
            UserStatus::AskMe => self.status_ask_me,
            UserStatus::Busy => self.status_busy,
            UserStatus::Offline => self.status_offline,
        }
    }
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        self.themes.get(&self.current_theme_name).unwrap()
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Override background colors
        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.card_hover;
        visuals.window_fill = colors.toast_background;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.selection_stroke;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.card_hover;
        visuals.widgets.hovered.bg_fill = colors.card_hover;
        visuals.widgets.active.bg_fill = colors.selection;

        // Override hyperlink
        visuals.hyperlink_color = colors.accent;

        // Override error/warning colors
        visuals.error_fg_color = colors.status_busy;
        visuals.warn_fg_color = colors.status_ask_me;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with a soft card grid".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            card_background: Color32::from_rgb(255, 255, 255),
            card_hover: Color32::from_rgb(236, 238, 242),
            card_border: Color32::from_rgb(210, 214, 220),

            selection: Color32::from_rgb(180, 200, 255),
            selection_stroke: Color32::from_rgb(40, 100, 200),
            accent: Color32::from_rgb(40, 100, 200),
            border: Color32::from_rgb(160, 160, 160),

            toast_background: Color32::from_rgb(240, 242, 246),

            status_join_me: Color32::from_rgb(0, 160, 180),
            status_active: Color32::from_rgb(40, 160, 40),
            status_ask_me: Color32::from_rgb(230, 120, 20),
            status_busy: Color32::from_rgb(200, 40, 40),
            status_offline: Color32::from_rgb(120, 120, 120),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme, the default".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(32, 33, 36),
            panel_background: Color32::from_rgb(32, 33, 36),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(150, 150, 150),
            text_strong: Color32::from_rgb(255, 255, 255),

            card_background: Color32::from_rgb(44, 46, 51),
            card_hover: Color32::from_rgb(58, 60, 66),
            card_border: Color32::from_rgb(70, 72, 78),

            selection: Color32::from_rgb(50, 80, 120),
            selection_stroke: Color32::from_rgb(52, 152, 219),
            accent: Color32::from_rgb(52, 152, 219),
            border: Color32::from_rgb(100, 100, 100),

            toast_background: Color32::from_rgb(40, 42, 46),

            status_join_me: Color32::from_rgb(26, 188, 156),
            status_active: Color32::from_rgb(46, 204, 113),
            status_ask_me: Color32::from_rgb(243, 156, 18),
            status_busy: Color32::from_rgb(231, 76, 60),
            status_offline: Color32::from_rgb(128, 132, 138),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            card_background: hex_to_color32("#343746"),
            card_hover: hex_to_color32("#44475a"),
            card_border: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            selection_stroke: hex_to_color32("#bd93f9"),
            accent: hex_to_color32("#bd93f9"),
            border: hex_to_color32("#6272a4"),

            toast_background: hex_to_color32("#21222c"),

            status_join_me: hex_to_color32("#8be9fd"),
            status_active: hex_to_color32("#50fa7b"),
            status_ask_me: hex_to_color32("#ffb86c"),
            status_busy: hex_to_color32("#ff5555"),
            status_offline: hex_to_color32("#6272a4"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
