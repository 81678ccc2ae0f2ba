//! Application-level coordination and workflow management.
//!
//! Handles high-level operations: roster loading, the presence feed
//! lifecycle, selection bookkeeping when the visible list changes, and the
//! notification pipeline.

use crate::app::AppState;
use crate::io::{LoadResult, PresenceFeed, RosterLoader};
use crate::state::RangeMode;
use beacon::{Friend, Notification, Roster, is_online_transition, render_template};
use std::path::PathBuf;
use std::time::Duration;

/// How often the simulated presence feed emits an event.
const FEED_INTERVAL: Duration = Duration::from_secs(2);
const FEED_SEED: u64 = 42;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing roster loading workflows
/// - Restarting the presence feed when the roster changes
/// - Applying presence events and raising notifications
/// - Keeping the selection consistent with the visible list
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous roster file loading.
    ///
    /// Immediately clears previous roster data to show the loading
    /// indicator.
    pub fn open_roster_file(
        state: &mut AppState,
        loader: &mut RosterLoader,
        feed: &mut PresenceFeed,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        feed.stop();
        state.reset_roster_state();
        loader.start_file_load(path, ctx);
    }

    /// Generates and loads a virtual roster in-memory.
    pub fn open_virtual_roster(
        state: &mut AppState,
        loader: &mut RosterLoader,
        feed: &mut PresenceFeed,
        ctx: &egui::Context,
    ) {
        match loader.load_virtual_roster() {
            Ok(roster) => {
                Self::install_roster(state, feed, roster, None, ctx);
            }
            Err(e) => {
                state.error_message = Some(format!("Error generating virtual roster: {}", e));
            }
        }
    }

    /// Checks for loading completion and applies results to application
    /// state. Called once per frame in the update loop. Returns true if a
    /// load operation completed (success or error).
    pub fn check_loading_completion(
        state: &mut AppState,
        loader: &mut RosterLoader,
        feed: &mut PresenceFeed,
        ctx: &egui::Context,
    ) -> bool {
        match loader.check_completion() {
            LoadResult::Success { roster, path } => {
                Self::install_roster(state, feed, roster, path, ctx);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading roster: {}", error_msg));
                state.friends.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    fn install_roster(
        state: &mut AppState,
        feed: &mut PresenceFeed,
        roster: Roster,
        path: Option<PathBuf>,
        ctx: &egui::Context,
    ) {
        state.reset_roster_state();
        state.friends.load_roster(roster, path);
        log::info!("roster loaded: {} friends", state.friends.friends().len());

        let ids: Vec<String> = state.friends.friends().iter().map(|f| f.id.clone()).collect();
        feed.start(ids, FEED_INTERVAL, FEED_SEED, ctx);
    }

    /// Drains the presence feed and applies every pending event.
    ///
    /// Offline→online transitions raise a notification when that friend's
    /// notifications are enabled; every applied event bumps the friend's
    /// activity, so the roster is re-sorted underneath any live selection.
    pub fn pump_presence_events(state: &mut AppState, feed: &mut PresenceFeed) {
        for event in feed.poll_events() {
            let Some(outcome) = state.friends.apply_presence_event(&event) else {
                continue;
            };
            let came_online = is_online_transition(outcome.was_offline, outcome.now_offline);
            if came_online && state.settings.settings().notifications_enabled(&event.friend_id) {
                let template = state.settings.settings().effective_template(&event.friend_id);
                state.notifications.push(Notification {
                    friend_id: event.friend_id.clone(),
                    message: render_template(template, &outcome.display_name),
                    raised_at: event.at,
                });
            }
        }
    }

    /// Reconciles the selection with this frame's visible list.
    ///
    /// Pruning runs only when the visible ID sequence actually changed, so
    /// steady frames cost one comparison and no selection churn.
    pub fn sync_visible_list(state: &mut AppState, visible: &[Friend]) {
        if state.friends.note_visible_list(visible) {
            let before = state.selection.len();
            state.selection.prune_selection(visible);
            let after = state.selection.len();
            if after != before {
                log::debug!("pruned selection {before} -> {after} after list change");
            }
        }
    }

    // ===== Card Interactions =====

    /// Plain click: the card becomes the only selected entry.
    pub fn handle_card_selected(state: &mut AppState, friend_id: &str) {
        state.selection.select_single(friend_id);
    }

    /// Modifier click: membership toggles.
    pub fn handle_card_toggled(state: &mut AppState, friend_id: &str) {
        state.selection.toggle_selection(friend_id);
    }

    /// Shift click: range extension against the visible list; with the
    /// multi-select modifier also held, the range is added instead of
    /// replacing.
    pub fn handle_range_extended(
        state: &mut AppState,
        friend_id: &str,
        additive: bool,
        visible: &[Friend],
    ) {
        let mode = if additive { RangeMode::Add } else { RangeMode::Replace };
        state.selection.apply_range_selection(friend_id, mode, visible);
    }

    // ===== Bulk Actions =====

    /// Applies notification preference edits to every selected friend.
    pub fn apply_preferences_to_selection(
        state: &mut AppState,
        enabled: bool,
        use_override: bool,
        template_override: Option<String>,
    ) {
        let selected: Vec<String> = state.selection.selected().iter().cloned().collect();
        if selected.is_empty() {
            return;
        }
        state.settings.update(|settings| {
            for id in &selected {
                let pref = settings.friend_prefs.entry(id.clone()).or_default();
                pref.enabled = enabled;
                pref.use_override = use_override;
                pref.template_override = template_override.clone();
            }
        });
        log::info!("updated notification preferences for {} friends", selected.len());
    }
}
