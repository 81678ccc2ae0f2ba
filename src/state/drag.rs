//! Drag-selection interaction state.
//!
//! A [`DragState`] exists only between pointer-down and pointer-up/cancel;
//! it snapshots everything the hit-testing math needs so mid-drag scrolling
//! and list churn cannot corrupt the gesture. [`DragSelectState`] wraps it
//! with the frame-crossing flags: whether a rectangle is visibly being
//! swept, and the one-frame-deferred overlay resync at drag end.

use egui::{Pos2, Vec2};
use std::collections::BTreeSet;

/// Snapshot taken at pointer-down, alive for the duration of one drag.
#[derive(Debug, Clone)]
pub struct DragState {
    /// Press position in viewport coordinates.
    pub start: Pos2,
    /// Latest pointer position in viewport coordinates.
    pub current: Pos2,
    /// Scroll offsets of the grid container at press time.
    pub scroll_start: Vec2,
    /// Whether the multi-select modifier was held at press time.
    pub additive: bool,
    /// True once the press has crossed the click-vs-drag threshold.
    pub moved: bool,
    /// Selection snapshot at press time; additive drags union hits into it.
    pub base_selection: BTreeSet<String>,
}

/// State related to the ongoing drag-selection gesture.
///
/// Responsibilities:
/// - Owning the ephemeral [`DragState`]
/// - Tracking whether a selection rectangle is actively being swept
/// - Deferring the end-of-drag overlay resync by one frame, so trailing
///   click handlers observe stable state
#[derive(Debug, Clone, Default)]
pub struct DragSelectState {
    drag: Option<DragState>,
    selecting: bool,
    end_resync_pending: bool,
}

impl DragSelectState {
    /// Creates a state with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag at `start`, snapshotting scroll and selection.
    pub fn begin(
        &mut self,
        start: Pos2,
        scroll_start: Vec2,
        additive: bool,
        base_selection: BTreeSet<String>,
    ) {
        self.drag = Some(DragState {
            start,
            current: start,
            scroll_start,
            additive,
            moved: false,
            base_selection,
        });
        self.selecting = false;
    }

    /// Ends the drag; the overlay resync happens on the following frame.
    pub fn finish(&mut self) {
        if self.drag.take().is_some() {
            self.end_resync_pending = true;
        }
    }

    /// Drops all gesture state without scheduling a resync (teardown).
    pub fn reset(&mut self) {
        self.drag = None;
        self.selecting = false;
        self.end_resync_pending = false;
    }

    /// Consumes the pending end-of-drag resync flag.
    pub fn take_end_resync(&mut self) -> bool {
        std::mem::take(&mut self.end_resync_pending)
    }

    // ===== Queries =====

    /// True while a pointer-down gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True while a moved drag is visibly sweeping a rectangle.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn drag_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut state = DragSelectState::new();
        assert!(!state.is_dragging());
        assert!(!state.take_end_resync());

        state.begin(Pos2::new(1.0, 2.0), Vec2::ZERO, false, BTreeSet::new());
        assert!(state.is_dragging());
        assert!(!state.drag().unwrap().moved);

        state.finish();
        assert!(!state.is_dragging());
        assert!(state.take_end_resync());
        assert!(!state.take_end_resync()); // consumed
    }

    #[test]
    fn test_finish_without_drag_schedules_nothing() {
        let mut state = DragSelectState::new();
        state.finish();
        assert!(!state.take_end_resync());
    }

    #[test]
    fn test_reset_discards_pending_resync() {
        let mut state = DragSelectState::new();
        state.begin(Pos2::ZERO, Vec2::ZERO, true, BTreeSet::new());
        state.finish();
        state.reset();
        assert!(!state.take_end_resync());
    }
}
