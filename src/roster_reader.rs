//! JSON roster file reading.
//!
//! Reads a roster exported as JSON (the format `rostergen` writes). Entries
//! without an ID are dropped rather than rejected; the selection subsystem
//! requires stable per-entry IDs and an ID-less entry can never be
//! addressed.

use crate::model::Roster;
use crate::traits::RosterReader;
use anyhow::Context;
use std::fs;

/// Reads rosters from JSON files on disk.
pub struct JsonRosterReader;

impl JsonRosterReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRosterReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterReader for JsonRosterReader {
    fn read(&self, path: &str) -> anyhow::Result<Roster> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read roster file {path}"))?;
        let mut roster: Roster = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse roster file {path}"))?;

        let before = roster.friends.len();
        roster.friends.retain(|f| !f.id.is_empty());
        let dropped = before - roster.friends.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} roster entries without an ID from {path}");
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Friend, UserStatus};
    use std::env;
    use std::fs;

    #[test]
    fn test_read_round_trip() {
        let path = env::temp_dir().join("beacon_test_roster.json");
        let path = path.to_str().unwrap();

        let roster = Roster {
            friends: vec![Friend {
                id: "usr_1".to_string(),
                display_name: "Alice".to_string(),
                status: UserStatus::Active,
                location: "wrld_a:1".to_string(),
                last_activity: Some(1000),
                ..Friend::default()
            }],
            fetched_at: 42,
        };
        fs::write(path, serde_json::to_string_pretty(&roster).unwrap()).unwrap();

        let read = JsonRosterReader::new().read(path).unwrap();
        assert_eq!(read.fetched_at, 42);
        assert_eq!(read.friends.len(), 1);
        assert_eq!(read.friends[0].id, "usr_1");
        assert_eq!(read.friends[0].display_name, "Alice");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_entries_without_id_are_dropped() {
        let path = env::temp_dir().join("beacon_test_roster_noid.json");
        let path = path.to_str().unwrap();

        let roster = Roster {
            friends: vec![
                Friend {
                    id: String::new(),
                    display_name: "Ghost".to_string(),
                    ..Friend::default()
                },
                Friend {
                    id: "usr_2".to_string(),
                    display_name: "Bob".to_string(),
                    ..Friend::default()
                },
            ],
            fetched_at: 0,
        };
        fs::write(path, serde_json::to_string(&roster).unwrap()).unwrap();

        let read = JsonRosterReader::new().read(path).unwrap();
        assert_eq!(read.friends.len(), 1);
        assert_eq!(read.friends[0].id, "usr_2");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = JsonRosterReader::new().read("/nonexistent/beacon_roster.json");
        assert!(result.is_err());
    }
}
