//! Centralized application state for the Beacon friend grid.
//!
//! This module composes focused state components that each manage one
//! aspect of the application's state:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::cache::RowDisplayCache;
use crate::state::{
    DragSelectState, FriendsState, GridViewportState, NotificationsState, SelectionStore,
    ThemeState,
};
use beacon::SettingsStore;

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Friend roster and filter state
    pub friends: FriendsState,

    /// Canonical selection state (one store for the lifetime of the view)
    pub selection: SelectionStore,

    /// Ephemeral drag-selection gesture state
    pub drag: DragSelectState,

    /// Grid scroll viewport state
    pub viewport: GridViewportState,

    /// Raised presence notifications
    pub notifications: NotificationsState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Persisted notification settings
    pub settings: SettingsStore,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Per-row display cache for the grid
    pub row_cache: RowDisplayCache,
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_theme("Dark".to_string())
    }

    /// Creates a new AppState with a specific theme loaded from storage.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            friends: FriendsState::new(),
            selection: SelectionStore::new(),
            drag: DragSelectState::new(),
            viewport: GridViewportState::new(),
            notifications: NotificationsState::new(),
            theme: ThemeState::with_theme(theme_name),
            settings: SettingsStore::load(),
            error_message: None,
            row_cache: RowDisplayCache::new(),
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets roster-related state when loading a new roster.
    ///
    /// Clears the roster, selection, gesture, scroll position, and caches.
    pub fn reset_roster_state(&mut self) {
        self.friends.clear();
        self.selection.clear_selection();
        self.drag.reset();
        self.viewport.reset();
        self.row_cache.invalidate();
        self.error_message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
