//! Floating surfaces over the grid: the bulk-actions bar and the
//! notification toasts.
//!
//! Both render as foreground areas on their own layers, which is what
//! keeps them out of drag selection: a pointer press claimed by one of
//! these layers never starts a rectangle or clears the selection.

use crate::app::AppState;
use crate::utils::format_relative_time;
use beacon::{ThemeColors, now_unix};
use eframe::egui;
use egui::{Align2, Area, CornerRadius, Frame, Id, Order, RichText, Stroke};

/// Result of user interaction with the bulk-actions bar.
pub enum BulkAction {
    /// Open the notification preferences modal for the selection.
    PreferencesRequested,
    /// Clear the selection.
    ClearRequested,
}

/// Renders the floating bulk-actions bar while a selection exists.
pub fn render_bulk_actions_bar(
    ctx: &egui::Context,
    state: &AppState,
    colors: &ThemeColors,
) -> Option<BulkAction> {
    if state.selection.is_empty() {
        return None;
    }

    let mut action = None;
    Area::new(Id::new("bulk_actions_bar"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            Frame::default()
                .fill(colors.toast_background)
                .stroke(Stroke::new(1.0, colors.border))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} selected", state.selection.len())).strong(),
                        );
                        ui.separator();
                        if ui.button("🔔 Preferences…").clicked() {
                            action = Some(BulkAction::PreferencesRequested);
                        }
                        if ui.button("Clear").clicked() {
                            action = Some(BulkAction::ClearRequested);
                        }
                    });
                });
        });

    action
}

/// Renders the notification toast stack in the bottom-right corner.
pub fn render_notification_toasts(ctx: &egui::Context, state: &mut AppState, colors: &ThemeColors) {
    if state.notifications.is_empty() {
        return;
    }
    let now = now_unix();
    let mut dismiss = false;

    Area::new(Id::new("notification_toasts"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                for notification in state.notifications.recent() {
                    Frame::default()
                        .fill(colors.toast_background)
                        .stroke(Stroke::new(1.0, colors.border))
                        .corner_radius(CornerRadius::same(4))
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(&notification.message);
                                ui.label(
                                    RichText::new(format_relative_time(now, notification.raised_at))
                                        .weak(),
                                );
                            });
                        });
                }
                if ui.small_button("dismiss all").clicked() {
                    dismiss = true;
                }
            });
        });

    if dismiss {
        state.notifications.clear();
    }
}
