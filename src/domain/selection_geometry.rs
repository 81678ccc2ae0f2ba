//! Geometry for drag-rectangle selection.
//!
//! This module provides pure functions for:
//! - Converting viewport-space points and card boxes into content space
//!   (coordinates relative to the scrollable content, independent of the
//!   current scroll offset)
//! - Axis-aligned rectangle intersection on closed intervals
//! - Click-vs-drag movement thresholds and edge auto-scroll speed
//!
//! Every function is defensive about non-finite inputs: bad geometry makes
//! the operation a no-op (empty rectangle, zero delta, no hit), never a
//! panic.

use egui::{Pos2, Rect, Vec2};

/// Pointer displacement on either axis beyond which a press becomes a drag.
pub const DRAG_MOVE_THRESHOLD: f32 = 4.0;

/// Accumulated scroll beyond which a press becomes a drag.
pub const SCROLL_MOVE_THRESHOLD: f32 = 1.0;

/// Height of the edge band in which auto-scroll engages.
pub const AUTO_SCROLL_BAND: f32 = 48.0;

/// Maximum auto-scroll speed in pixels per frame.
pub const AUTO_SCROLL_MAX_SPEED: f32 = 16.0;

fn rect_is_finite(rect: &Rect) -> bool {
    rect.min.x.is_finite() && rect.min.y.is_finite() && rect.max.x.is_finite() && rect.max.y.is_finite()
}

/// Transforms a viewport-space rectangle into content space:
/// `content = viewport − container_origin + scroll`.
pub fn to_content_rect(rect: Rect, container_origin: Pos2, scroll: Vec2) -> Rect {
    Rect::from_min_max(
        rect.min - container_origin.to_vec2() + scroll,
        rect.max - container_origin.to_vec2() + scroll,
    )
}

/// Builds the content-space selection rectangle for a drag.
///
/// The start point is anchored with the scroll offsets captured at drag
/// start, the current point with the offsets at sample time, so the
/// rectangle keeps covering everything swept over even while auto-scroll
/// moves the content under the pointer.
pub fn selection_rect_in_content(
    start: Pos2,
    current: Pos2,
    container_origin: Pos2,
    scroll_start: Vec2,
    scroll_now: Vec2,
) -> Rect {
    let start_x = start.x - container_origin.x + scroll_start.x;
    let start_y = start.y - container_origin.y + scroll_start.y;
    let current_x = current.x - container_origin.x + scroll_now.x;
    let current_y = current.y - container_origin.y + scroll_now.y;

    Rect::from_min_max(
        Pos2::new(start_x.min(current_x), start_y.min(current_y)),
        Pos2::new(start_x.max(current_x), start_y.max(current_y)),
    )
}

/// Closed-interval axis-aligned intersection test. Rectangles that share
/// only an edge or a corner still intersect; non-finite rectangles never
/// intersect anything.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    if !rect_is_finite(a) || !rect_is_finite(b) {
        return false;
    }
    a.left() <= b.right() && a.right() >= b.left() && a.top() <= b.bottom() && a.bottom() >= b.top()
}

/// Whether a press has turned into a drag: pointer displacement over 4px on
/// either axis, or accumulated scroll over 1px.
pub fn drag_moved(start: Pos2, current: Pos2, scroll_start: Vec2, scroll_now: Vec2) -> bool {
    let dx = (current.x - start.x).abs();
    let dy = (current.y - start.y).abs();
    let scroll_dx = (scroll_now.x - scroll_start.x).abs();
    let scroll_dy = (scroll_now.y - scroll_start.y).abs();
    if !dx.is_finite() || !dy.is_finite() || !scroll_dx.is_finite() || !scroll_dy.is_finite() {
        return false;
    }
    dx > DRAG_MOVE_THRESHOLD
        || dy > DRAG_MOVE_THRESHOLD
        || scroll_dx > SCROLL_MOVE_THRESHOLD
        || scroll_dy > SCROLL_MOVE_THRESHOLD
}

/// Vertical auto-scroll delta for the current pointer position.
///
/// Zero outside the 48px edge bands; inside a band the speed scales
/// linearly up to 16px per frame, saturating once the pointer reaches or
/// crosses the container edge. Negative values scroll up.
pub fn auto_scroll_delta(pointer_y: f32, container_top: f32, container_bottom: f32) -> f32 {
    if !pointer_y.is_finite() || !container_top.is_finite() || !container_bottom.is_finite() {
        return 0.0;
    }
    if container_bottom <= container_top {
        return 0.0;
    }

    if pointer_y < container_top + AUTO_SCROLL_BAND {
        let ratio = ((AUTO_SCROLL_BAND - (pointer_y - container_top)) / AUTO_SCROLL_BAND)
            .clamp(0.0, 1.0);
        if ratio > 0.0 {
            return -(AUTO_SCROLL_MAX_SPEED * ratio).ceil();
        }
    } else if pointer_y > container_bottom - AUTO_SCROLL_BAND {
        let ratio = ((AUTO_SCROLL_BAND - (container_bottom - pointer_y)) / AUTO_SCROLL_BAND)
            .clamp(0.0, 1.0);
        if ratio > 0.0 {
            return (AUTO_SCROLL_MAX_SPEED * ratio).ceil();
        }
    }
    0.0
}
