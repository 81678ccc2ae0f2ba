//! Header panel UI rendering
//!
//! Handles the top bar with roster controls, the search box, the offline
//! filter, and the theme selector.

use crate::app::AppState;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a roster file to open
    OpenRosterRequested(PathBuf),
    /// User clicked the "Virtual Roster" button
    OpenVirtualRosterRequested,
}

/// Renders the application header with roster and filter controls.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Roster").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Roster Files", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenRosterRequested(path));
            }
        }

        if ui.button("🔮 Virtual Roster").clicked() {
            interaction = Some(HeaderInteraction::OpenVirtualRosterRequested);
        }

        ui.separator();

        // Search box; while it has focus, the selection shortcuts stay out
        // of the way. Filter edits flow into the visible list next frame,
        // where the grid panel prunes the selection.
        egui::TextEdit::singleline(state.friends.search_query_mut())
            .hint_text("Search friends…")
            .desired_width(220.0)
            .show(ui);
        if !state.friends.search_query().is_empty() && ui.small_button("✖").clicked() {
            state.friends.search_query_mut().clear();
        }

        let mut show_offline = state.friends.show_offline();
        if ui.checkbox(&mut show_offline, "Show offline").changed() {
            state.friends.set_show_offline(show_offline);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
