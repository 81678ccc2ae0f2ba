//! Visual selection overlay.
//!
//! The overlay is the visual side of drag selection: it paints the rubber
//! band while a rectangle is swept, and it keeps its own copy of the
//! selected targets. That copy is intentionally independent state; the
//! canonical selection lives in the store, and the overlay is brought back
//! in line through explicit resyncs: immediately after a drag ends, and
//! on demand whenever the store reports a non-silent change.

use beacon::{Friend, ThemeColors, with_alpha};
use egui::{Painter, Rect};
use std::collections::BTreeSet;

/// Eventually-consistent visual companion of the selection store.
#[derive(Debug, Clone, Default)]
pub struct SelectionOverlay {
    /// The overlay's own selected-target list, in visible-list order.
    targets: Vec<String>,
    /// Set when the store changed and a resync is due.
    stale: bool,
}

impl SelectionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the overlay out of date; called from the store's change
    /// observer.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Pushes the authoritative selected-element list, ordered by the
    /// visible list. Selected IDs not currently visible carry no element
    /// and are skipped.
    pub fn sync_targets(&mut self, selected: &BTreeSet<String>, visible: &[Friend]) {
        self.targets = visible
            .iter()
            .filter(|f| selected.contains(&f.id))
            .map(|f| f.id.clone())
            .collect();
        self.stale = false;
    }

    /// The overlay's current target list.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Paints the rubber-band rectangle, clipped to the grid container.
    pub fn paint_rubber_band(&self, painter: &Painter, rect: Rect, container: Rect, colors: &ThemeColors) {
        let visible = rect.intersect(container);
        if !visible.is_positive() {
            return;
        }
        let rounding = egui::CornerRadius::same(2);
        painter.rect_filled(visible, rounding, with_alpha(colors.accent, 36));
        painter.rect_stroke(
            visible,
            rounding,
            egui::Stroke::new(1.0, with_alpha(colors.accent, 180)),
            egui::StrokeKind::Inside,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(id: &str) -> Friend {
        Friend {
            id: id.to_string(),
            display_name: id.to_string(),
            ..Friend::default()
        }
    }

    #[test]
    fn test_sync_orders_by_visible_list_and_clears_stale() {
        let mut overlay = SelectionOverlay::new();
        overlay.mark_stale();

        let visible = vec![friend("usr_a"), friend("usr_b"), friend("usr_c")];
        let selected: BTreeSet<String> =
            ["usr_c", "usr_a"].iter().map(|s| s.to_string()).collect();

        overlay.sync_targets(&selected, &visible);
        assert_eq!(overlay.targets(), &["usr_a".to_string(), "usr_c".to_string()]);
        assert!(!overlay.is_stale());
    }

    #[test]
    fn test_sync_skips_selected_but_invisible_ids() {
        let mut overlay = SelectionOverlay::new();
        let visible = vec![friend("usr_a")];
        let selected: BTreeSet<String> =
            ["usr_a", "usr_hidden"].iter().map(|s| s.to_string()).collect();

        overlay.sync_targets(&selected, &visible);
        assert_eq!(overlay.targets(), &["usr_a".to_string()]);
    }
}
