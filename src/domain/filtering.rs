//! Friend list filtering.
//!
//! Produces the currently-visible subset of the sorted roster: the search
//! query matches name and status text case-insensitively, and offline
//! friends can be hidden wholesale. The output order follows the input
//! order, so the filtered list doubles as the range list for shift-extend
//! selection.

use beacon::Friend;

/// Returns the visible subset of `friends` for the given query and
/// offline-visibility toggle, preserving order.
pub fn filter_friends(friends: &[Friend], query: &str, show_offline: bool) -> Vec<Friend> {
    let needle = query.trim().to_lowercase();
    friends
        .iter()
        .filter(|f| show_offline || !f.is_offline())
        .filter(|f| {
            needle.is_empty()
                || f.display_name.to_lowercase().contains(&needle)
                || f.status_description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
