//! Grid scroll viewport state.
//!
//! This module encapsulates the vertical scroll position of the friend
//! grid, including programmatic scroll requests from the auto-scroll loop.
//! egui owns the actual scroll area; this state feeds it an override offset
//! when auto-scroll wants to move it, and reads the settled offset back
//! after rendering.

/// State related to the grid's scrollable viewport.
///
/// Responsibilities:
/// - Tracking the current vertical scroll offset
/// - Carrying one-frame scroll overrides (edge auto-scroll)
/// - Clamping offsets to the scrollable extent
#[derive(Debug, Clone, Default)]
pub struct GridViewportState {
    /// Current vertical scroll offset in pixels.
    scroll_y: f32,
    /// Offset to force onto the scroll area next frame, if any.
    pending_scroll_y: Option<f32>,
    /// Total content height from the last rendered frame.
    content_height: f32,
    /// Visible viewport height from the last rendered frame.
    viewport_height: f32,
}

impl GridViewportState {
    /// Creates a viewport state scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets scrolling (new roster loaded).
    pub fn reset(&mut self) {
        self.scroll_y = 0.0;
        self.pending_scroll_y = None;
    }

    // ===== Queries =====

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Largest valid scroll offset given the last measured extents.
    pub fn max_scroll_y(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    // ===== Mutations =====

    /// Records the settled scroll offset after the scroll area rendered.
    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = if y.is_finite() { y.max(0.0) } else { 0.0 };
    }

    /// Records the measured content and viewport heights for clamping.
    pub fn set_extents(&mut self, content_height: f32, viewport_height: f32) {
        if content_height.is_finite() {
            self.content_height = content_height.max(0.0);
        }
        if viewport_height.is_finite() {
            self.viewport_height = viewport_height.max(0.0);
        }
    }

    /// Requests a relative scroll for next frame (auto-scroll). Returns the
    /// clamped delta that will actually be applied.
    pub fn request_scroll_delta(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() || delta == 0.0 {
            return 0.0;
        }
        let base = self.pending_scroll_y.unwrap_or(self.scroll_y);
        let target = (base + delta).clamp(0.0, self.max_scroll_y());
        let applied = target - base;
        if applied != 0.0 {
            self.pending_scroll_y = Some(target);
        }
        applied
    }

    /// Takes the pending scroll override for the scroll area, if any.
    pub fn take_scroll_override(&mut self) -> Option<f32> {
        self.pending_scroll_y.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_delta_clamps_to_extents() {
        let mut viewport = GridViewportState::new();
        viewport.set_extents(1000.0, 400.0);
        viewport.set_scroll_y(0.0);

        assert_eq!(viewport.request_scroll_delta(-10.0), 0.0);
        assert_eq!(viewport.take_scroll_override(), None);

        assert_eq!(viewport.request_scroll_delta(16.0), 16.0);
        assert_eq!(viewport.take_scroll_override(), Some(16.0));

        viewport.set_scroll_y(595.0);
        assert_eq!(viewport.request_scroll_delta(16.0), 5.0); // max is 600
    }

    #[test]
    fn test_consecutive_deltas_accumulate_within_a_frame() {
        let mut viewport = GridViewportState::new();
        viewport.set_extents(1000.0, 400.0);
        viewport.request_scroll_delta(16.0);
        viewport.request_scroll_delta(16.0);
        assert_eq!(viewport.take_scroll_override(), Some(32.0));
    }

    #[test]
    fn test_non_finite_inputs_are_ignored() {
        let mut viewport = GridViewportState::new();
        viewport.set_extents(f32::NAN, f32::INFINITY);
        viewport.set_scroll_y(f32::NAN);
        assert_eq!(viewport.scroll_y(), 0.0);
        assert_eq!(viewport.request_scroll_delta(f32::NAN), 0.0);
    }
}
