//! Per-frame geometry of the rendered card grid.
//!
//! Rebuilt while the grid renders, this is the card surface the selection
//! subsystem hit-tests against: every selectable card's ID and
//! viewport-space bounding box, scoped to the scroll container, plus the
//! container's own geometry. The drag controller resolves entries only
//! through this registry.

use egui::{Pos2, Rect, Vec2};

/// Geometry snapshot of the grid for one frame.
#[derive(Debug, Clone)]
pub struct GridSurface {
    /// Visible rect of the scroll container, in viewport space.
    pub container_rect: Rect,
    /// Scroll offsets the cards were laid out with.
    pub scroll_offset: Vec2,
    /// Registered cards: stable entry ID and viewport-space box, in list
    /// order.
    cards: Vec<(String, Rect)>,
}

impl GridSurface {
    /// An empty surface with no measurable container.
    pub fn empty() -> Self {
        Self {
            container_rect: Rect::NOTHING,
            scroll_offset: Vec2::ZERO,
            cards: Vec::new(),
        }
    }

    pub fn new(container_rect: Rect, scroll_offset: Vec2) -> Self {
        Self {
            container_rect,
            scroll_offset,
            cards: Vec::new(),
        }
    }

    /// Registers one rendered card.
    pub fn register_card(&mut self, friend_id: String, rect: Rect) {
        self.cards.push((friend_id, rect));
    }

    /// All registered cards in list order.
    pub fn cards(&self) -> &[(String, Rect)] {
        &self.cards
    }

    /// The card containing `pos`, if any.
    pub fn card_at(&self, pos: Pos2) -> Option<&str> {
        self.cards
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(id, _)| id.as_str())
    }

    /// Whether the container was actually measured this frame. An
    /// unmeasured surface turns every selection gesture into a no-op.
    pub fn is_measurable(&self) -> bool {
        self.container_rect.min.x.is_finite()
            && self.container_rect.min.y.is_finite()
            && self.container_rect.max.x.is_finite()
            && self.container_rect.max.y.is_finite()
            && self.container_rect.width() > 0.0
            && self.container_rect.height() > 0.0
    }
}

impl Default for GridSurface {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_surface_is_not_measurable() {
        assert!(!GridSurface::empty().is_measurable());
    }

    #[test]
    fn test_card_lookup() {
        let mut surface = GridSurface::new(
            Rect::from_min_max(Pos2::ZERO, Pos2::new(800.0, 600.0)),
            Vec2::ZERO,
        );
        surface.register_card(
            "usr_1".to_string(),
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(240.0, 250.0)),
        );
        surface.register_card(
            "usr_2".to_string(),
            Rect::from_min_max(Pos2::new(248.0, 0.0), Pos2::new(488.0, 250.0)),
        );

        assert!(surface.is_measurable());
        assert_eq!(surface.card_at(Pos2::new(100.0, 100.0)), Some("usr_1"));
        assert_eq!(surface.card_at(Pos2::new(300.0, 100.0)), Some("usr_2"));
        assert_eq!(surface.card_at(Pos2::new(244.0, 100.0)), None); // in the gap
    }
}
