//! Notification preferences modal.
//!
//! Edits the notification preference fields shared by every selected
//! friend. While the modal is open it claims the select-all shortcut, and
//! its window layer keeps pointer presses away from the grid.

use beacon::AppSettings;
use eframe::egui;
use std::collections::BTreeSet;

/// Editable draft of the preference fields applied to the selection.
#[derive(Debug, Clone)]
pub struct PrefsDraft {
    pub enabled: bool,
    pub use_override: bool,
    pub template: String,
}

impl PrefsDraft {
    /// Seeds a draft from the current settings. Fields start from the
    /// first selected friend's preference (or defaults), which is the
    /// common case of editing one friend or a freshly-uniform batch.
    pub fn from_settings(settings: &AppSettings, selected: &BTreeSet<String>) -> Self {
        let first_pref = selected
            .iter()
            .next()
            .and_then(|id| settings.friend_prefs.get(id));
        match first_pref {
            Some(pref) => Self {
                enabled: pref.enabled,
                use_override: pref.use_override,
                template: pref
                    .template_override
                    .clone()
                    .unwrap_or_else(|| settings.default_template.clone()),
            },
            None => Self {
                enabled: true,
                use_override: false,
                template: settings.default_template.clone(),
            },
        }
    }
}

/// Outcome of rendering the modal for one frame.
pub enum PrefsModalOutcome {
    /// Still open.
    Open,
    /// Apply the draft to the selection and close.
    Apply,
    /// Close without applying.
    Cancel,
}

/// Renders the modal; the caller owns the draft while the modal is open.
pub fn render_prefs_modal(
    ctx: &egui::Context,
    draft: &mut PrefsDraft,
    selection_count: usize,
) -> PrefsModalOutcome {
    let mut outcome = PrefsModalOutcome::Open;
    let mut open = true;

    egui::Window::new("Notification Preferences")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!(
                "Applies to {selection_count} selected friend{}",
                if selection_count == 1 { "" } else { "s" }
            ));
            ui.separator();

            ui.checkbox(&mut draft.enabled, "Notify when they come online");
            ui.checkbox(&mut draft.use_override, "Use a custom message");
            ui.add_enabled(
                draft.use_override,
                egui::TextEdit::singleline(&mut draft.template)
                    .hint_text("{name} is online")
                    .desired_width(260.0),
            );
            ui.label(egui::RichText::new("{name} expands to the friend's name").weak());

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    outcome = PrefsModalOutcome::Apply;
                }
                if ui.button("Cancel").clicked() {
                    outcome = PrefsModalOutcome::Cancel;
                }
            });
        });

    if !open {
        outcome = PrefsModalOutcome::Cancel;
    }
    outcome
}
