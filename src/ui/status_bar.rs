//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying roster and selection counts.

use crate::app::AppState;
use crate::utils::{format_memory_mb, format_relative_time, get_current_memory_mb};
use beacon::now_unix;
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, feed_running: bool) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());

        if state.friends.is_loaded() {
            let total = state.friends.friends().len();
            let online = state
                .friends
                .friends()
                .iter()
                .filter(|f| !f.is_offline())
                .count();
            let source = match state.friends.source_path() {
                Some(path) => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "roster".to_string()),
                None => "Virtual Roster".to_string(),
            };
            let fetched = format_relative_time(now_unix(), state.friends.fetched_at());

            ui.label(RichText::new(format!(
                "{source} | {online} / {total} online | fetched {fetched}"
            ))
            .strong());

            if !state.selection.is_empty() {
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new(format!("{} selected", state.selection.len()))
                        .strong()
                        .color(ui.visuals().hyperlink_color),
                );
            }

            ui.label(RichText::new("|").strong());
            ui.label(if feed_running {
                RichText::new("presence feed: live").strong()
            } else {
                RichText::new("presence feed: idle").strong()
            });
        } else {
            ui.label(RichText::new("No roster loaded").strong());
        }
    });
}
