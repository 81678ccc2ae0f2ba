//! Asynchronous roster loading.
//!
//! This module handles loading roster files in background threads,
//! keeping the GUI responsive during file I/O.

use beacon::{JsonRosterReader, Roster, RosterReader, VirtualRosterReader};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};
use std::sync::{Arc, Mutex};
use std::thread;

/// Holds the state of an async roster loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
pub struct LoadingState {
    /// True if a roster load is currently in progress
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a completed roster loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        roster: Roster,
        /// Path to the file that was loaded (None for virtual rosters)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of roster files.
pub struct RosterLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,
    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Roster, String>>>,
    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl RosterLoader {
    /// Creates a new loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a roster file asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let path_string = path.to_string_lossy().into_owned();

        thread::spawn(move || {
            log::info!("loading roster from {path_string}");
            let result = JsonRosterReader::new()
                .read(&path_string)
                .map_err(|e| e.to_string());

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Generates a virtual roster in-memory, synchronously.
    ///
    /// Useful for demos and testing without a roster file.
    pub fn load_virtual_roster(&mut self) -> Result<Roster, String> {
        VirtualRosterReader::new().read("").map_err(|e| e.to_string())
    }

    /// Checks for background load completion; call once per frame.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(roster) => {
                        let path = self.pending_load_path.take();
                        LoadResult::Success { roster, path }
                    }
                    Err(error_msg) => {
                        self.pending_load_path = None;
                        LoadResult::Error(error_msg)
                    }
                };
                self.loading_receiver = None;
                return load_result;
            }
        }
        LoadResult::None
    }
}

impl Default for RosterLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_creation() {
        let loader = RosterLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_virtual_roster_loading() {
        let mut loader = RosterLoader::new();
        let result = loader.load_virtual_roster();
        assert!(result.is_ok(), "virtual roster generation should succeed");
        assert!(!result.unwrap().friends.is_empty());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = RosterLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }
}
