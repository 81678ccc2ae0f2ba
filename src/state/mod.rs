//! State management modules for the Beacon friend grid.
//!
//! This module contains state-only logic (no UI concerns):
//! - Friends state (roster entries, filters, visible-list tracking)
//! - Selection state (the canonical selected-ID set and anchor)
//! - Drag state (the ephemeral drag-selection gesture)
//! - Viewport state (grid scroll offset and auto-scroll overrides)
//! - Notifications state (bounded toast backlog)
//! - Theme state (theme manager, current theme)

mod friends;
mod selection;
mod drag;
mod viewport;
mod notifications_state;
mod theme_state;

pub use friends::FriendsState;
pub use selection::{RangeMode, SelectionStore};
pub use drag::{DragSelectState, DragState};
pub use viewport::GridViewportState;
pub use notifications_state::NotificationsState;
pub use theme_state::ThemeState;
