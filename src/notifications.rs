//! Presence notification rendering.
//!
//! A notification is raised when a friend transitions from offline to
//! online (per the offline heuristics in [`crate::model::Friend`]) and that
//! friend's notifications are enabled. The message comes from a template
//! with a `{name}` placeholder.

use serde::{Deserialize, Serialize};

/// A rendered presence notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub friend_id: String,
    pub message: String,
    /// Unix-second timestamp the notification was raised.
    pub raised_at: i64,
}

/// Renders a message template, substituting every `{name}` occurrence.
pub fn render_template(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

/// Whether an offline→online edge occurred.
pub fn is_online_transition(was_offline: bool, now_offline: bool) -> bool {
    was_offline && !now_offline
}
