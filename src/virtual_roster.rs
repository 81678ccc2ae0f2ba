//! Seeded virtual roster generation.
//!
//! Produces a reproducible friend roster without any upstream service,
//! used by the demo button in the GUI, by `rostergen`, and by tests.

use crate::model::{Friend, Roster, UserStatus};
use crate::traits::RosterReader;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_COUNT: usize = 64;
const DEFAULT_SEED: u64 = 42;

static NAME_PARTS: Lazy<(&[&str], &[&str])> = Lazy::new(|| {
    (
        &[
            "Aki", "Bell", "Cinder", "Dawn", "Ember", "Fen", "Gale", "Haru", "Iris", "Juno",
            "Kite", "Luna", "Mori", "Nox", "Opal", "Pine", "Quill", "Rook", "Sol", "Tali",
            "Umbra", "Vex", "Wren", "Yuki", "Zephyr",
        ][..],
        &[
            "fox", "wing", "shade", "spark", "bloom", "drift", "frost", "glow", "leaf", "moth",
            "paw", "root", "song", "star", "tide", "wisp",
        ][..],
    )
});

static WORLD_NAMES: &[&str] = &[
    "The Midnight Lounge",
    "Sakura Rooftop",
    "Deep Sea Observatory",
    "Pixel Arcade",
    "Aurora Campfire",
    "Floating Library",
    "Neon Alley",
    "Cloud Garden",
];

/// Generates a reproducible virtual roster.
pub struct VirtualRosterReader {
    count: usize,
    seed: u64,
    /// Unix-second base for generated timestamps; injectable so tests get
    /// byte-identical rosters.
    base_time: i64,
}

impl VirtualRosterReader {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_COUNT, DEFAULT_SEED, now_unix())
    }

    pub fn with_config(count: usize, seed: u64, base_time: i64) -> Self {
        Self {
            count,
            seed,
            base_time,
        }
    }
}

impl Default for VirtualRosterReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterReader for VirtualRosterReader {
    fn read(&self, _path: &str) -> anyhow::Result<Roster> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let friends = (0..self.count)
            .map(|index| generate_friend(&mut rng, index, self.base_time))
            .collect();

        Ok(Roster {
            friends,
            fetched_at: self.base_time,
        })
    }
}

/// Current unix time in seconds.
pub fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn generate_friend(rng: &mut StdRng, index: usize, base_time: i64) -> Friend {
    let (firsts, seconds) = *NAME_PARTS;
    let display_name = format!(
        "{}{}",
        firsts[rng.gen_range(0..firsts.len())],
        seconds[rng.gen_range(0..seconds.len())]
    );

    let status = match rng.gen_range(0..100) {
        0..=14 => UserStatus::JoinMe,
        15..=44 => UserStatus::Active,
        45..=59 => UserStatus::AskMe,
        60..=69 => UserStatus::Busy,
        _ => UserStatus::Offline,
    };

    let location = if status == UserStatus::Offline {
        "offline".to_string()
    } else {
        format!(
            "wrld_{:08x}:{}",
            rng.gen::<u32>(),
            rng.gen_range(1..=99999u32)
        )
    };

    let status_description = if status == UserStatus::Offline {
        String::new()
    } else {
        WORLD_NAMES[rng.gen_range(0..WORLD_NAMES.len())].to_string()
    };

    // Offline friends went quiet between one hour and two weeks ago; online
    // friends were active within the last hour.
    let idle_secs: i64 = if status == UserStatus::Offline {
        rng.gen_range(3_600..1_209_600)
    } else {
        rng.gen_range(0..3_600)
    };

    Friend {
        id: format!("usr_{:016x}", rng.gen::<u64>()),
        display_name: format!("{display_name}{}", index % 7),
        status,
        status_description,
        location,
        platform: if rng.gen_bool(0.8) {
            "standalonewindows".to_string()
        } else {
            "android".to_string()
        },
        last_activity: Some(base_time - idle_secs),
        last_login: Some(base_time - idle_secs - rng.gen_range(0..86_400)),
        tags: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_roster() {
        let a = VirtualRosterReader::with_config(20, 7, 1_700_000_000)
            .read("")
            .unwrap();
        let b = VirtualRosterReader::with_config(20, 7, 1_700_000_000)
            .read("")
            .unwrap();
        assert_eq!(a.friends, b.friends);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = VirtualRosterReader::with_config(20, 1, 1_700_000_000)
            .read("")
            .unwrap();
        let b = VirtualRosterReader::with_config(20, 2, 1_700_000_000)
            .read("")
            .unwrap();
        assert_ne!(a.friends, b.friends);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let roster = VirtualRosterReader::with_config(128, 42, 1_700_000_000)
            .read("")
            .unwrap();
        let mut ids: Vec<_> = roster.friends.iter().map(|f| f.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), roster.friends.len());
    }

    #[test]
    fn test_offline_friends_have_offline_location() {
        let roster = VirtualRosterReader::with_config(128, 42, 1_700_000_000)
            .read("")
            .unwrap();
        for friend in &roster.friends {
            if friend.status == UserStatus::Offline {
                assert_eq!(friend.location, "offline");
            }
        }
    }
}
