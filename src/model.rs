//! Friend roster data model.
//!
//! Defines the friend entry type shared by the roster readers, the presence
//! feed, and the GUI, together with the canonical sorting and refresh-merge
//! rules applied whenever the roster changes.

use serde::{Deserialize, Serialize};

/// A friend's self-declared availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "join me")]
    JoinMe,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "ask me")]
    AskMe,
    #[serde(rename = "busy")]
    Busy,
    #[serde(rename = "offline")]
    Offline,
}

impl UserStatus {
    /// Sort rank: the most approachable statuses first, offline last.
    pub fn rank(&self) -> u8 {
        match self {
            UserStatus::JoinMe => 0,
            UserStatus::Active => 1,
            UserStatus::AskMe => 2,
            UserStatus::Busy => 3,
            UserStatus::Offline => 4,
        }
    }

    /// Human-readable label for card rendering.
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::JoinMe => "Join Me",
            UserStatus::Active => "Active",
            UserStatus::AskMe => "Ask Me",
            UserStatus::Busy => "Busy",
            UserStatus::Offline => "Offline",
        }
    }
}

/// One entry in the friend roster.
///
/// `last_activity` and `last_login` are unix-second timestamps; together
/// with the ID they form the entry's size signature (the fields that change
/// a card's rendered height, e.g. the "last seen" line appearing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Friend {
    pub id: String,
    pub display_name: String,
    pub status: UserStatus,
    pub status_description: String,
    /// World/instance descriptor, or "offline" / "web".
    pub location: String,
    pub platform: String,
    pub last_activity: Option<i64>,
    pub last_login: Option<i64>,
    pub tags: Vec<String>,
}

impl Default for Friend {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: String::new(),
            status: UserStatus::Offline,
            status_description: String::new(),
            location: String::from("offline"),
            platform: String::new(),
            last_activity: None,
            last_login: None,
            tags: Vec::new(),
        }
    }
}

impl Friend {
    /// A friend is offline when either the declared status or the location
    /// says so; "web" counts as offline for presence purposes.
    pub fn is_offline(&self) -> bool {
        if self.status == UserStatus::Offline {
            return true;
        }
        let location = self.location.to_ascii_lowercase();
        location == "offline" || location == "web"
    }

    /// Status with the offline heuristics applied.
    pub fn effective_status(&self) -> UserStatus {
        if self.is_offline() {
            UserStatus::Offline
        } else {
            self.status
        }
    }

    /// Most recent known activity timestamp, if any.
    pub fn last_seen(&self) -> Option<i64> {
        self.last_activity.or(self.last_login)
    }

    /// Signature over the fields that affect a card's rendered size.
    ///
    /// Row size keys concatenate these; a changed timestamp invalidates the
    /// cached display data for the row containing this entry.
    pub fn size_signature(&self) -> String {
        format!(
            "{}:{}:{}",
            self.id,
            self.last_activity.map(|t| t.to_string()).unwrap_or_default(),
            self.last_login.map(|t| t.to_string()).unwrap_or_default(),
        )
    }
}

/// A fetched friend roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roster {
    pub friends: Vec<Friend>,
    /// Unix-second timestamp of the fetch, 0 when unknown.
    pub fetched_at: i64,
}

/// Sorts friends in place: approachable statuses first, then most recent
/// activity, then case-insensitive name, then ID for full determinism.
pub fn sort_friends(friends: &mut [Friend]) {
    friends.sort_by(|a, b| {
        a.effective_status()
            .rank()
            .cmp(&b.effective_status().rank())
            .then_with(|| b.last_seen().unwrap_or(0).cmp(&a.last_seen().unwrap_or(0)))
            .then_with(|| {
                a.display_name
                    .to_lowercase()
                    .cmp(&b.display_name.to_lowercase())
            })
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// A single presence change for one friend, as emitted by a feed.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceEvent {
    pub friend_id: String,
    pub update: PresenceUpdate,
    /// Unix-second timestamp of the change.
    pub at: i64,
}

/// The kind of change carried by a [`PresenceEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum PresenceUpdate {
    Status(UserStatus),
    Location(String),
    /// Activity bump with no status change (refreshes `last_activity`).
    Activity,
}

/// Result of applying a presence event: the offline edge and the friend's
/// name, for notification decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceOutcome {
    pub was_offline: bool,
    pub now_offline: bool,
    pub display_name: String,
}

/// Applies a presence event to the roster in place.
///
/// Returns `None` when the friend is unknown (stale feed events are
/// silently dropped). Every applied event refreshes `last_activity`, which
/// changes the entry's size signature.
pub fn apply_presence(friends: &mut [Friend], event: &PresenceEvent) -> Option<PresenceOutcome> {
    let friend = friends.iter_mut().find(|f| f.id == event.friend_id)?;
    let was_offline = friend.is_offline();

    match &event.update {
        PresenceUpdate::Status(status) => {
            friend.status = *status;
            if *status == UserStatus::Offline {
                friend.location = "offline".to_string();
            } else if friend.location == "offline" || friend.location == "web" {
                friend.location = "private".to_string();
            }
        }
        PresenceUpdate::Location(location) => {
            friend.location = location.clone();
        }
        PresenceUpdate::Activity => {}
    }
    friend.last_activity = Some(event.at);

    Some(PresenceOutcome {
        was_offline,
        now_offline: friend.is_offline(),
        display_name: friend.display_name.clone(),
    })
}

/// Merges a refreshed roster into the previously known one.
///
/// The incoming entries win field-wise, except that an absent incoming
/// timestamp keeps the previously known value (the upstream feed omits
/// timestamps it has not re-resolved). Entries missing from the refresh are
/// dropped.
pub fn merge_friends(existing: &[Friend], incoming: Vec<Friend>) -> Vec<Friend> {
    incoming
        .into_iter()
        .map(|mut fresh| {
            if let Some(known) = existing.iter().find(|f| f.id == fresh.id) {
                if fresh.last_activity.is_none() {
                    fresh.last_activity = known.last_activity;
                }
                if fresh.last_login.is_none() {
                    fresh.last_login = known.last_login;
                }
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(id: &str, name: &str, status: UserStatus, last_activity: Option<i64>) -> Friend {
        Friend {
            id: id.to_string(),
            display_name: name.to_string(),
            status,
            location: if status == UserStatus::Offline {
                "offline".to_string()
            } else {
                "wrld_test:1".to_string()
            },
            last_activity,
            ..Friend::default()
        }
    }

    #[test]
    fn test_offline_detection_by_location() {
        let mut f = friend("usr_1", "A", UserStatus::Active, None);
        f.location = "web".to_string();
        assert!(f.is_offline());
        assert_eq!(f.effective_status(), UserStatus::Offline);

        f.location = "wrld_abc:42".to_string();
        assert!(!f.is_offline());
        assert_eq!(f.effective_status(), UserStatus::Active);
    }

    #[test]
    fn test_sort_offline_last() {
        let mut friends = vec![
            friend("usr_1", "Zoe", UserStatus::Offline, Some(100)),
            friend("usr_2", "Amy", UserStatus::Busy, Some(100)),
            friend("usr_3", "Mia", UserStatus::JoinMe, Some(100)),
        ];
        sort_friends(&mut friends);
        assert_eq!(friends[0].id, "usr_3");
        assert_eq!(friends[1].id, "usr_2");
        assert_eq!(friends[2].id, "usr_1");
    }

    #[test]
    fn test_sort_is_deterministic_for_equal_keys() {
        let mut a = vec![
            friend("usr_2", "same", UserStatus::Active, Some(50)),
            friend("usr_1", "same", UserStatus::Active, Some(50)),
        ];
        let mut b = a.clone();
        b.reverse();
        sort_friends(&mut a);
        sort_friends(&mut b);
        assert_eq!(a, b);
        assert_eq!(a[0].id, "usr_1"); // ID breaks the tie
    }

    #[test]
    fn test_sort_recent_activity_first_within_status() {
        let mut friends = vec![
            friend("usr_1", "A", UserStatus::Active, Some(100)),
            friend("usr_2", "B", UserStatus::Active, Some(500)),
        ];
        sort_friends(&mut friends);
        assert_eq!(friends[0].id, "usr_2");
    }

    #[test]
    fn test_merge_keeps_known_timestamps() {
        let existing = vec![friend("usr_1", "A", UserStatus::Active, Some(1234))];
        let refreshed = vec![friend("usr_1", "A", UserStatus::Busy, None)];

        let merged = merge_friends(&existing, refreshed);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].status, UserStatus::Busy);
        assert_eq!(merged[0].last_activity, Some(1234));
    }

    #[test]
    fn test_merge_drops_removed_friends() {
        let existing = vec![
            friend("usr_1", "A", UserStatus::Active, Some(1)),
            friend("usr_2", "B", UserStatus::Active, Some(2)),
        ];
        let refreshed = vec![friend("usr_2", "B", UserStatus::Active, Some(3))];

        let merged = merge_friends(&existing, refreshed);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "usr_2");
        assert_eq!(merged[0].last_activity, Some(3));
    }

    #[test]
    fn test_size_signature_tracks_activity_fields() {
        let mut f = friend("usr_1", "A", UserStatus::Active, Some(10));
        let before = f.size_signature();
        f.last_activity = Some(11);
        assert_ne!(before, f.size_signature());
    }

    #[test]
    fn test_apply_presence_status_change_reports_online_edge() {
        let mut friends = vec![friend("usr_1", "A", UserStatus::Offline, Some(10))];
        let outcome = apply_presence(
            &mut friends,
            &PresenceEvent {
                friend_id: "usr_1".to_string(),
                update: PresenceUpdate::Status(UserStatus::Active),
                at: 500,
            },
        )
        .unwrap();

        assert!(outcome.was_offline);
        assert!(!outcome.now_offline);
        assert_eq!(friends[0].last_activity, Some(500));
        assert_ne!(friends[0].location, "offline");
    }

    #[test]
    fn test_apply_presence_unknown_friend_is_dropped() {
        let mut friends = vec![friend("usr_1", "A", UserStatus::Active, None)];
        let outcome = apply_presence(
            &mut friends,
            &PresenceEvent {
                friend_id: "usr_404".to_string(),
                update: PresenceUpdate::Activity,
                at: 500,
            },
        );
        assert!(outcome.is_none());
    }
}
