//! Per-row display cache for the friend grid.
//!
//! Rows carry a size key derived from their members' IDs and
//! size-affecting fields; while that key is unchanged the formatted
//! "last seen" labels are reused instead of recomputed. Labels also depend
//! on the current minute, so entries expire when the clock minute ticks.

use crate::utils::format_relative_time;
use beacon::Friend;
use std::collections::HashMap;

/// Cached display data for one grid row.
#[derive(Debug, Clone)]
pub struct RowDisplay {
    size_key: String,
    built_minute: i64,
    /// Per-member "last seen" label; None for friends currently online.
    pub last_seen_labels: Vec<Option<String>>,
}

/// Cache of formatted row display data, keyed by row ID.
#[derive(Debug, Clone, Default)]
pub struct RowDisplayCache {
    rows: HashMap<String, RowDisplay>,
}

impl RowDisplayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns display data for a row, rebuilding when the row's size key
    /// or the clock minute changed.
    pub fn get_or_build(&mut self, row_id: &str, size_key: &str, items: &[Friend], now: i64) -> &RowDisplay {
        let minute = now / 60;
        let stale = match self.rows.get(row_id) {
            Some(cached) => cached.size_key != size_key || cached.built_minute != minute,
            None => true,
        };
        if stale {
            let labels = items
                .iter()
                .map(|friend| {
                    if friend.is_offline() {
                        friend.last_seen().map(|then| format_relative_time(now, then))
                    } else {
                        None
                    }
                })
                .collect();
            self.rows.insert(
                row_id.to_string(),
                RowDisplay {
                    size_key: size_key.to_string(),
                    built_minute: minute,
                    last_seen_labels: labels,
                },
            );
        }
        &self.rows[row_id]
    }

    /// Drops rows that no longer exist (the list shrank or re-chunked).
    pub fn retain_rows(&mut self, live_row_ids: &[&str]) {
        self.rows.retain(|id, _| live_row_ids.contains(&id.as_str()));
    }

    /// Invalidates everything (roster reload).
    pub fn invalidate(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon::UserStatus;

    fn offline_friend(id: &str, last_activity: i64) -> Friend {
        Friend {
            id: id.to_string(),
            display_name: id.to_string(),
            status: UserStatus::Offline,
            location: "offline".to_string(),
            last_activity: Some(last_activity),
            ..Friend::default()
        }
    }

    #[test]
    fn test_unchanged_size_key_reuses_labels() {
        let mut cache = RowDisplayCache::new();
        let items = vec![offline_friend("usr_1", 0)];
        let now = 7_200;

        let first = cache.get_or_build("row-0", "key-a", &items, now).clone();
        // Same key and minute: stale items would be visible if rebuilt.
        let moved = vec![offline_friend("usr_1", 3_600)];
        let second = cache.get_or_build("row-0", "key-a", &moved, now).clone();
        assert_eq!(first.last_seen_labels, second.last_seen_labels);
    }

    #[test]
    fn test_changed_size_key_rebuilds() {
        let mut cache = RowDisplayCache::new();
        let items = vec![offline_friend("usr_1", 0)];
        let now = 7_200;

        cache.get_or_build("row-0", "key-a", &items, now);
        let moved = vec![offline_friend("usr_1", 3_600)];
        let rebuilt = cache.get_or_build("row-0", "key-b", &moved, now);
        assert_eq!(rebuilt.last_seen_labels, vec![Some("1h ago".to_string())]);
    }

    #[test]
    fn test_minute_tick_rebuilds() {
        let mut cache = RowDisplayCache::new();
        let items = vec![offline_friend("usr_1", 0)];

        let first = cache.get_or_build("row-0", "key-a", &items, 3_600).clone();
        let second = cache.get_or_build("row-0", "key-a", &items, 7_200).clone();
        assert_ne!(first.last_seen_labels, second.last_seen_labels);
    }

    #[test]
    fn test_retain_rows_drops_dead_rows() {
        let mut cache = RowDisplayCache::new();
        let items = vec![offline_friend("usr_1", 0)];
        cache.get_or_build("row-0", "k", &items, 60);
        cache.get_or_build("row-4", "k", &items, 60);

        cache.retain_rows(&["row-0"]);
        assert!(cache.rows.contains_key("row-0"));
        assert!(!cache.rows.contains_key("row-4"));
    }
}
