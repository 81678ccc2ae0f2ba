//! Global keyboard shortcuts for selection.
//!
//! - Escape clears the selection
//! - Ctrl/Cmd+A selects every currently visible friend
//! - Ctrl/Cmd+Shift+A deselects everything
//!
//! Shortcuts are suppressed while any text-editable widget has keyboard
//! focus; the select-all chord is additionally suppressed while a blocking
//! modal owns it.

use crate::app::AppState;
use beacon::Friend;
use egui::{Key, Modifiers};

/// Handles global selection shortcuts for one frame.
pub fn handle_global_shortcuts(
    ctx: &egui::Context,
    state: &mut AppState,
    visible: &[Friend],
    modal_open: bool,
) {
    // A focused search box (or any text edit) owns the keyboard.
    if ctx.wants_keyboard_input() {
        return;
    }

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        state.selection.clear_selection();
        return;
    }

    // The preferences modal claims the select-all chord while open.
    if modal_open {
        return;
    }

    let deselect_all = ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::A));
    if deselect_all {
        state.selection.clear_selection();
        return;
    }

    let select_all = ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::A));
    if select_all {
        state.selection.select_all(visible);
    }
}
