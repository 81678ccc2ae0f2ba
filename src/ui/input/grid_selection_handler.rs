//! Drag-rectangle selection input handling for the friend grid.
//!
//! Implements the pointer side of multi-select:
//! - A press on empty grid space starts a drag (clearing the selection
//!   first unless the multi-select modifier is held); a press on a card or
//!   on any floating control never does.
//! - While the drag is beyond the click threshold, the swept rectangle is
//!   hit-tested against the card surface in content space and the store is
//!   updated silently every frame.
//! - Near the container's top/bottom edge the grid auto-scrolls, which
//!   itself counts as drag motion and re-hit-tests immediately.
//! - When the drag ends, the overlay gets exactly one authoritative resync
//!   on the following frame.
//!
//! Every geometry read is guarded: an unmeasured container or non-finite
//! pointer data turns the gesture into a no-op instead of an error.

use crate::app::AppState;
use crate::domain::selection_geometry::{
    auto_scroll_delta, drag_moved, rects_intersect, selection_rect_in_content, to_content_rect,
};
use crate::ui::grid_surface::GridSurface;
use crate::ui::overlay::SelectionOverlay;
use beacon::Friend;
use egui::{LayerId, PointerButton, Pos2};
use std::cell::RefCell;
use std::rc::Rc;

/// Pointer facts sampled once per frame.
struct PointerSample {
    pressed_at: Option<Pos2>,
    released: bool,
    any_down: bool,
    latest_pos: Option<Pos2>,
    additive_modifier: bool,
}

fn sample_pointer(ctx: &egui::Context) -> PointerSample {
    ctx.input(|i| PointerSample {
        pressed_at: if i.pointer.button_pressed(PointerButton::Primary) {
            i.pointer.press_origin()
        } else {
            None
        },
        released: i.pointer.button_released(PointerButton::Primary),
        any_down: i.pointer.any_down(),
        latest_pos: i.pointer.latest_pos(),
        additive_modifier: i.modifiers.command,
    })
}

/// Handles all drag-selection input for one frame.
///
/// Must run after the grid rendered (so `surface` describes this frame's
/// cards) and before the rubber band is painted.
pub fn handle_grid_selection_input(
    ctx: &egui::Context,
    state: &mut AppState,
    overlay: &Rc<RefCell<SelectionOverlay>>,
    surface: &GridSurface,
    visible: &[Friend],
    grid_layer: LayerId,
) {
    // Deferred end-of-drag step: one frame after release, drop the
    // "actively selecting" flag and push the authoritative target list.
    if state.drag.take_end_resync() {
        state.drag.set_selecting(false);
        overlay
            .borrow_mut()
            .sync_targets(state.selection.selected(), visible);
    }

    if !surface.is_measurable() {
        // Nothing to hit-test against; cancel any gesture without resync.
        state.drag.reset();
        return;
    }

    let pointer = sample_pointer(ctx);

    if let Some(press_pos) = pointer.pressed_at {
        handle_press(ctx, state, surface, press_pos, pointer.additive_modifier, grid_layer);
    }

    if state.drag.is_dragging() {
        drive_drag(state, surface, &pointer);

        if pointer.released || !pointer.any_down {
            state.drag.finish();
        }
        // Keep frames coming for the auto-scroll loop.
        ctx.request_repaint();
    }
}

/// Press handling: click-outside clearing and drag-start gating.
fn handle_press(
    ctx: &egui::Context,
    state: &mut AppState,
    surface: &GridSurface,
    press_pos: Pos2,
    additive: bool,
    grid_layer: LayerId,
) {
    if !press_pos.x.is_finite() || !press_pos.y.is_finite() {
        return;
    }
    if !surface.container_rect.contains(press_pos) {
        return;
    }
    // A widget already claimed this press (scrollbar thumb, a button
    // overlapping the grid).
    if ctx.is_using_pointer() {
        return;
    }
    // Floating controls (bulk-actions bar, toasts, modals, popups) live on
    // other layers; a press claimed by them never reaches the grid.
    if ctx.layer_id_at(press_pos).is_some_and(|layer| layer != grid_layer) {
        return;
    }
    if surface.card_at(press_pos).is_some() {
        // Card presses are handled by the card's own click response.
        return;
    }

    // Click-outside with no modifier clears right away, before any drag
    // threshold is crossed.
    if !additive {
        state.selection.clear_selection();
    }

    let base = state.selection.selected().clone();
    state
        .drag
        .begin(press_pos, surface.scroll_offset, additive, base);
}

/// Per-frame drag update: pointer tracking, auto-scroll, hit-testing.
fn drive_drag(state: &mut AppState, surface: &GridSurface, pointer: &PointerSample) {
    let (start, current, scroll_start, additive, base_selection, mut moved) = {
        let Some(drag) = state.drag.drag_mut() else {
            return;
        };
        if let Some(pos) = pointer.latest_pos {
            if pos.x.is_finite() && pos.y.is_finite() {
                drag.current = pos;
            }
        }
        (
            drag.start,
            drag.current,
            drag.scroll_start,
            drag.additive,
            drag.base_selection.clone(),
            drag.moved,
        )
    };

    // Edge auto-scroll. The viewport applies the delta next frame, but the
    // selection rectangle extends by it immediately, so the swept region
    // and the hit set update in the same frame the scroll happens.
    let mut scroll_now = surface.scroll_offset;
    let wanted = auto_scroll_delta(
        current.y,
        surface.container_rect.top(),
        surface.container_rect.bottom(),
    );
    if wanted != 0.0 {
        let applied = state.viewport.request_scroll_delta(wanted);
        if applied != 0.0 {
            scroll_now.y += applied;
            moved = true;
        }
    }

    moved = moved || drag_moved(start, current, scroll_start, scroll_now);
    if let Some(drag) = state.drag.drag_mut() {
        drag.moved = moved;
    }
    state.drag.set_selecting(moved);

    if !moved {
        return;
    }

    // Hit-test the swept rectangle against every card, all in content
    // space. Cards transform with the scroll they were laid out at, which
    // makes their content boxes scroll-invariant.
    let selection_rect = selection_rect_in_content(
        start,
        current,
        surface.container_rect.min,
        scroll_start,
        scroll_now,
    );

    let mut hits: Vec<String> = Vec::new();
    for (id, card_rect) in surface.cards() {
        let content_box = to_content_rect(*card_rect, surface.container_rect.min, surface.scroll_offset);
        if rects_intersect(&selection_rect, &content_box) {
            hits.push(id.clone());
        }
    }

    // Mid-drag updates are silent; the overlay resync happens once at drag
    // end.
    if additive {
        // The pre-drag snapshot may hold IDs pruned out mid-drag (a friend
        // filtered away while the rectangle is open); only surfaced cards
        // come back.
        let mut merged: Vec<String> = base_selection
            .iter()
            .filter(|id| surface.cards().iter().any(|(card_id, _)| card_id == *id))
            .cloned()
            .collect();
        for hit in hits {
            if !merged.contains(&hit) {
                merged.push(hit);
            }
        }
        let anchor = state.selection.anchor().map(|a| a.to_string());
        state.selection.set_selection(merged, anchor.as_deref(), true);
    } else {
        let anchor = hits
            .first()
            .cloned()
            .or_else(|| state.selection.anchor().map(|a| a.to_string()));
        state.selection.set_selection(hits, anchor.as_deref(), true);
    }
}
