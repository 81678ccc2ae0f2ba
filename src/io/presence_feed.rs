//! Simulated presence feed.
//!
//! A background thread emits a random walk of presence changes for the
//! loaded roster over an mpsc channel; the GUI drains the channel once per
//! frame. The thread checks a shared running flag between events, so
//! teardown (or a roster reload) stops it deterministically.

use beacon::{PresenceEvent, PresenceUpdate, UserStatus, now_unix};
use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::{Receiver, channel};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

static FEED_WORLDS: &[&str] = &[
    "wrld_2f31a4c9:12001",
    "wrld_8be00d17:4532",
    "wrld_c4a9e2b0:88",
    "wrld_51d6f7aa:90210",
];

/// Emits simulated presence events for a fixed set of friend IDs.
pub struct PresenceFeed {
    /// Shared running flag; the worker exits when it flips to false.
    running: Arc<Mutex<bool>>,
    /// Channel receiver for emitted events.
    receiver: Option<Receiver<PresenceEvent>>,
}

impl PresenceFeed {
    /// Creates a stopped feed.
    pub fn new() -> Self {
        Self {
            running: Arc::new(Mutex::new(false)),
            receiver: None,
        }
    }

    /// Whether the worker thread is (still) supposed to run.
    pub fn is_running(&self) -> bool {
        *self.running.lock().unwrap()
    }

    /// Starts the feed for the given friend IDs, replacing any previous
    /// worker. Each emitted event requests a repaint so the GUI picks it up
    /// promptly even when idle.
    pub fn start(&mut self, friend_ids: Vec<String>, interval: Duration, seed: u64, ctx: &egui::Context) {
        self.stop();
        if friend_ids.is_empty() {
            return;
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.running = Arc::new(Mutex::new(true));

        let running = Arc::clone(&self.running);
        let ctx_handle = ctx.clone();

        log::info!("presence feed started for {} friends", friend_ids.len());
        thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(seed);
            loop {
                thread::sleep(interval);
                if !*running.lock().unwrap() {
                    break;
                }
                let event = random_event(&mut rng, &friend_ids, now_unix());
                if sender.send(event).is_err() {
                    break;
                }
                ctx_handle.request_repaint();
            }
            log::info!("presence feed stopped");
        });
    }

    /// Signals the worker to exit and detaches the channel.
    pub fn stop(&mut self) {
        *self.running.lock().unwrap() = false;
        self.receiver = None;
    }

    /// Drains all events received since the last poll.
    pub fn poll_events(&mut self) -> Vec<PresenceEvent> {
        match &self.receiver {
            Some(receiver) => receiver.try_iter().collect(),
            None => Vec::new(),
        }
    }
}

impl Default for PresenceFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PresenceFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Generates one random presence event for a random friend.
fn random_event(rng: &mut StdRng, friend_ids: &[String], at: i64) -> PresenceEvent {
    let friend_id = friend_ids[rng.gen_range(0..friend_ids.len())].clone();
    let update = match rng.gen_range(0..10) {
        0..=4 => {
            let status = match rng.gen_range(0..5) {
                0 => UserStatus::JoinMe,
                1 => UserStatus::Active,
                2 => UserStatus::AskMe,
                3 => UserStatus::Busy,
                _ => UserStatus::Offline,
            };
            PresenceUpdate::Status(status)
        }
        5..=7 => {
            PresenceUpdate::Location(FEED_WORLDS[rng.gen_range(0..FEED_WORLDS.len())].to_string())
        }
        _ => PresenceUpdate::Activity,
    };

    PresenceEvent {
        friend_id,
        update,
        at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_starts_stopped() {
        let mut feed = PresenceFeed::new();
        assert!(!feed.is_running());
        assert!(feed.poll_events().is_empty());
    }

    #[test]
    fn test_start_with_no_friends_stays_stopped() {
        let mut feed = PresenceFeed::new();
        let ctx = egui::Context::default();
        feed.start(Vec::new(), Duration::from_millis(1), 42, &ctx);
        assert!(!feed.is_running());
    }

    #[test]
    fn test_random_event_targets_known_friend() {
        let mut rng = StdRng::seed_from_u64(42);
        let ids = vec!["usr_1".to_string(), "usr_2".to_string()];
        for _ in 0..50 {
            let event = random_event(&mut rng, &ids, 1000);
            assert!(ids.contains(&event.friend_id));
            assert_eq!(event.at, 1000);
        }
    }

    #[test]
    fn test_random_event_is_seed_deterministic() {
        let ids = vec!["usr_1".to_string(), "usr_2".to_string()];
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_event(&mut a, &ids, 5), random_event(&mut b, &ids, 5));
        }
    }
}
