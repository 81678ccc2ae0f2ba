//! Friend roster state management.
//!
//! This module encapsulates all state related to the loaded roster,
//! including the sorted entries, the source path, and the filter controls
//! that determine which entries are visible.

use beacon::{Friend, PresenceEvent, PresenceOutcome, Roster, apply_presence, sort_friends};
use std::path::PathBuf;

/// State related to the loaded friend roster and its filters.
///
/// Responsibilities:
/// - Owning the sorted roster entries
/// - Tracking the source (file path, or None for a virtual roster)
/// - Holding the search query and offline-visibility toggle
/// - Detecting visible-list changes so the selection can be pruned
#[derive(Debug, Default)]
pub struct FriendsState {
    /// Sorted roster entries; resorted after every presence change.
    friends: Vec<Friend>,
    /// Whether a roster has been loaded at all (an empty roster counts).
    loaded: bool,
    /// Path of the loaded roster file (None for virtual rosters).
    source_path: Option<PathBuf>,
    /// Unix-second fetch timestamp from the roster.
    fetched_at: i64,
    /// Search query over names and status text.
    search_query: String,
    /// Whether offline friends are shown.
    show_offline: bool,
    /// Visible-list snapshot from the previous frame, for prune decisions.
    last_visible_ids: Vec<String>,
}

impl FriendsState {
    /// Creates a state with no roster loaded.
    pub fn new() -> Self {
        Self {
            show_offline: true,
            ..Self::default()
        }
    }

    /// Loads a roster, sorting it into canonical order.
    pub fn load_roster(&mut self, mut roster: Roster, path: Option<PathBuf>) {
        sort_friends(&mut roster.friends);
        self.friends = roster.friends;
        self.fetched_at = roster.fetched_at;
        self.source_path = path;
        self.loaded = true;
        self.last_visible_ids.clear();
    }

    /// Clears all roster state.
    pub fn clear(&mut self) {
        self.friends.clear();
        self.loaded = false;
        self.source_path = None;
        self.fetched_at = 0;
        self.last_visible_ids.clear();
    }

    /// Applies one presence event and restores sort order.
    pub fn apply_presence_event(&mut self, event: &PresenceEvent) -> Option<PresenceOutcome> {
        let outcome = apply_presence(&mut self.friends, event)?;
        sort_friends(&mut self.friends);
        Some(outcome)
    }

    // ===== Queries =====

    /// The sorted roster entries.
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Whether a roster has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Path of the loaded roster file, if file-backed.
    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    /// Fetch timestamp of the loaded roster.
    pub fn fetched_at(&self) -> i64 {
        self.fetched_at
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn search_query_mut(&mut self) -> &mut String {
        &mut self.search_query
    }

    pub fn show_offline(&self) -> bool {
        self.show_offline
    }

    pub fn set_show_offline(&mut self, show: bool) {
        self.show_offline = show;
    }

    /// Records the visible-ID list for this frame and reports whether it
    /// differs from the previous frame (the signal to prune the selection).
    pub fn note_visible_list(&mut self, visible: &[Friend]) -> bool {
        let ids: Vec<String> = visible.iter().map(|f| f.id.clone()).collect();
        if ids == self.last_visible_ids {
            return false;
        }
        self.last_visible_ids = ids;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon::UserStatus;

    fn roster() -> Roster {
        Roster {
            friends: vec![
                Friend {
                    id: "usr_b".to_string(),
                    display_name: "Bee".to_string(),
                    status: UserStatus::Offline,
                    location: "offline".to_string(),
                    ..Friend::default()
                },
                Friend {
                    id: "usr_a".to_string(),
                    display_name: "Ant".to_string(),
                    status: UserStatus::Active,
                    location: "wrld_x:1".to_string(),
                    ..Friend::default()
                },
            ],
            fetched_at: 100,
        }
    }

    #[test]
    fn test_load_sorts_roster() {
        let mut state = FriendsState::new();
        state.load_roster(roster(), None);
        assert!(state.is_loaded());
        assert_eq!(state.friends()[0].id, "usr_a"); // online first
    }

    #[test]
    fn test_note_visible_list_detects_changes() {
        let mut state = FriendsState::new();
        state.load_roster(roster(), None);

        let all: Vec<Friend> = state.friends().to_vec();
        assert!(state.note_visible_list(&all)); // first snapshot is a change
        assert!(!state.note_visible_list(&all));
        assert!(state.note_visible_list(&all[..1]));
    }

    #[test]
    fn test_presence_event_resorts() {
        let mut state = FriendsState::new();
        state.load_roster(roster(), None);

        // Bee comes online with fresher activity; resorting puts it first.
        let outcome = state
            .apply_presence_event(&PresenceEvent {
                friend_id: "usr_b".to_string(),
                update: beacon::PresenceUpdate::Status(UserStatus::JoinMe),
                at: 999,
            })
            .unwrap();
        assert!(outcome.was_offline);
        assert!(!outcome.now_offline);
        assert_eq!(state.friends()[0].id, "usr_b");
    }
}
