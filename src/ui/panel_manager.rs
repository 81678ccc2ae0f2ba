//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, friend grid, status bar, floating
//! surfaces) and funnels their interactions back to the application
//! coordinator.

use crate::app::AppState;
use crate::ui::overlay::SelectionOverlay;
use crate::ui::{floating, friends_panel, header, status_bar};
use beacon::Friend;
use std::cell::RefCell;
use std::rc::Rc;

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// User picked a roster file to open
    OpenRosterRequested(std::path::PathBuf),
    /// User requested a generated virtual roster
    OpenVirtualRosterRequested,
    /// A friend card was plainly clicked
    CardSelected { friend_id: String },
    /// A friend card was modifier-clicked
    CardToggled { friend_id: String },
    /// A friend card was shift-clicked
    RangeExtended { friend_id: String, additive: bool },
    /// The bulk-actions bar asked for the preferences modal
    PreferencesRequested,
    /// The bulk-actions bar asked to clear the selection
    ClearSelectionRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        overlay: &Rc<RefCell<SelectionOverlay>>,
        visible: &[Friend],
        feed_running: bool,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state
            .theme
            .theme_manager()
            .get_theme(state.theme.current_theme_name())
            .map(|theme| theme.colors.clone());
        let Some(theme_colors) = theme_colors else {
            return None;
        };

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenRosterRequested(path) => {
                        PanelInteraction::OpenRosterRequested(path)
                    }
                    header::HeaderInteraction::OpenVirtualRosterRequested => {
                        PanelInteraction::OpenVirtualRosterRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, feed_running);
        });

        // Central panel: the friend grid
        let grid_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(grid_frame).show(ctx, |ui| {
            if let Some(panel_interaction) =
                friends_panel::render_friends_panel(ui, state, overlay, visible, &theme_colors)
            {
                interaction = Some(match panel_interaction {
                    friends_panel::FriendsPanelInteraction::CardSelected { friend_id } => {
                        PanelInteraction::CardSelected { friend_id }
                    }
                    friends_panel::FriendsPanelInteraction::CardToggled { friend_id } => {
                        PanelInteraction::CardToggled { friend_id }
                    }
                    friends_panel::FriendsPanelInteraction::RangeExtended { friend_id, additive } => {
                        PanelInteraction::RangeExtended { friend_id, additive }
                    }
                });
            }
        });

        // Floating surfaces above the grid
        if let Some(bulk_action) = floating::render_bulk_actions_bar(ctx, state, &theme_colors) {
            interaction = Some(match bulk_action {
                floating::BulkAction::PreferencesRequested => PanelInteraction::PreferencesRequested,
                floating::BulkAction::ClearRequested => PanelInteraction::ClearSelectionRequested,
            });
        }
        floating::render_notification_toasts(ctx, state, &theme_colors);

        interaction
    }
}
