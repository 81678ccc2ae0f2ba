//! Friends grid panel UI rendering.
//!
//! Renders the scrollable, width-responsive card grid and wires the
//! selection subsystem around it: every card registers itself on the
//! frame's [`GridSurface`], the drag controller consumes that surface, and
//! the rubber band is painted on top. All rows are painted (the grid is
//! not virtualized), which keeps every card hit-testable during a drag.

use crate::app::{AppState, ApplicationCoordinator};
use crate::domain::grid::{self, GridRow};
use crate::rendering::card_renderer;
use crate::ui::grid_surface::GridSurface;
use crate::ui::input::grid_selection_handler;
use crate::ui::overlay::SelectionOverlay;
use beacon::{Friend, ThemeColors, now_unix};
use egui::{Pos2, Rect, ScrollArea, Sense, Vec2};
use std::cell::RefCell;
use std::rc::Rc;

/// Result of friend card interactions that need to be handled by the
/// application.
pub enum FriendsPanelInteraction {
    /// A card was plainly clicked: it becomes the only selected entry.
    CardSelected { friend_id: String },
    /// A card was clicked with the multi-select modifier: toggle.
    CardToggled { friend_id: String },
    /// A card was shift-clicked: range extension (additive with the
    /// multi-select modifier also held).
    RangeExtended { friend_id: String, additive: bool },
}

/// Renders the friend grid with drag selection, returning any discrete
/// card interaction.
pub fn render_friends_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    overlay: &Rc<RefCell<SelectionOverlay>>,
    visible: &[Friend],
    colors: &ThemeColors,
) -> Option<FriendsPanelInteraction> {
    if !state.friends.is_loaded() {
        ui.centered_and_justified(|ui| {
            ui.label("No roster loaded. Open a roster file or generate a virtual one.");
        });
        return None;
    }

    // The visible list changed (filter edit, resort, presence churn):
    // prune before anything hit-tests or renders selection state.
    ApplicationCoordinator::sync_visible_list(state, visible);

    let mut interaction: Option<FriendsPanelInteraction> = None;
    let gap = grid::effective_gap(ui.spacing().item_spacing.x);
    let now = now_unix();
    let grid_layer = ui.layer_id();

    // drag_to_scroll would claim content drags for kinetic scrolling and
    // fight the selection rectangle.
    let mut scroll_area = ScrollArea::vertical()
        .id_salt("friend_grid")
        .auto_shrink([false, false])
        .drag_to_scroll(false);
    if let Some(offset_y) = state.viewport.take_scroll_override() {
        scroll_area = scroll_area.vertical_scroll_offset(offset_y);
    }

    let output = scroll_area.show(ui, |ui| {
        let mut cards: Vec<(String, Rect)> = Vec::new();

        if visible.is_empty() {
            ui.label("No friends match the current filters.");
            return cards;
        }

        let available = ui.available_width();
        let columns = grid::compute_columns(available, gap);
        let rows = grid::build_rows(visible, columns);
        let row_height = grid::min_row_height(columns);
        let card_width = ((available - gap * (columns.saturating_sub(1)) as f32)
            / columns as f32)
            .max(1.0);

        let live_ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        state.row_cache.retain_rows(&live_ids);

        for row in &rows {
            render_row(
                ui,
                state,
                row,
                card_width,
                row_height,
                now,
                colors,
                &mut cards,
                &mut interaction,
            );
        }

        cards
    });

    // Record the settled geometry for clamping and for next frame's
    // auto-scroll overrides.
    state
        .viewport
        .set_extents(output.content_size.y, output.inner_rect.height());
    state.viewport.set_scroll_y(output.state.offset.y);

    let mut surface = GridSurface::new(output.inner_rect, output.state.offset);
    for (id, rect) in output.inner {
        surface.register_card(id, rect);
    }

    grid_selection_handler::handle_grid_selection_input(
        ui.ctx(),
        state,
        overlay,
        &surface,
        visible,
        grid_layer,
    );

    // On-demand overlay resync after discrete selection changes.
    if overlay.borrow().is_stale() {
        overlay
            .borrow_mut()
            .sync_targets(state.selection.selected(), visible);
    }

    paint_rubber_band(ui, state, overlay, &surface, colors);

    interaction
}

#[allow(clippy::too_many_arguments)]
fn render_row(
    ui: &mut egui::Ui,
    state: &mut AppState,
    row: &GridRow,
    card_width: f32,
    row_height: f32,
    now: i64,
    colors: &ThemeColors,
    cards: &mut Vec<(String, Rect)>,
    interaction: &mut Option<FriendsPanelInteraction>,
) {
    let display = state
        .row_cache
        .get_or_build(&row.id, &row.size_key, &row.items, now)
        .clone();

    ui.horizontal(|ui| {
        for (index, friend) in row.items.iter().enumerate() {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(card_width, row_height), Sense::click());
            cards.push((friend.id.clone(), rect));

            if ui.is_rect_visible(rect) {
                let is_selected = state.selection.is_selected(&friend.id);
                let is_hovered = response.hovered() && !state.drag.is_selecting();
                card_renderer::render_friend_card(
                    ui,
                    rect,
                    friend,
                    display.last_seen_labels.get(index).and_then(|l| l.as_deref()),
                    is_selected,
                    is_hovered,
                    colors,
                );
            }

            if response.clicked() {
                let modifiers = ui.input(|i| i.modifiers);
                *interaction = Some(if modifiers.shift {
                    FriendsPanelInteraction::RangeExtended {
                        friend_id: friend.id.clone(),
                        additive: modifiers.command,
                    }
                } else if modifiers.command {
                    FriendsPanelInteraction::CardToggled {
                        friend_id: friend.id.clone(),
                    }
                } else {
                    FriendsPanelInteraction::CardSelected {
                        friend_id: friend.id.clone(),
                    }
                });
            }
        }
    });
}

/// Paints the drag rectangle in viewport space, shifted by any scroll that
/// happened since the drag started.
fn paint_rubber_band(
    ui: &egui::Ui,
    state: &AppState,
    overlay: &Rc<RefCell<SelectionOverlay>>,
    surface: &GridSurface,
    colors: &ThemeColors,
) {
    if !state.drag.is_selecting() {
        return;
    }
    let Some(drag) = state.drag.drag() else {
        return;
    };

    let scroll_delta = surface.scroll_offset - drag.scroll_start;
    let start_on_screen = drag.start - scroll_delta;
    let rect = Rect::from_min_max(
        Pos2::new(
            start_on_screen.x.min(drag.current.x),
            start_on_screen.y.min(drag.current.y),
        ),
        Pos2::new(
            start_on_screen.x.max(drag.current.x),
            start_on_screen.y.max(drag.current.y),
        ),
    );

    overlay
        .borrow()
        .paint_rubber_band(ui.painter(), rect, surface.container_rect, colors);
}
