//! Beacon Friend Presence GUI Application
//!
//! Shows a friend roster as a width-responsive card grid with full
//! multi-select support:
//! - Drag-rectangle selection with edge auto-scroll
//! - Click / modifier-click / shift-range selection
//! - Keyboard shortcuts (Escape, Ctrl+A, Ctrl+Shift+A)
//!
//! A simulated presence feed drives status changes and raises per-friend
//! configurable notifications.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core logic (grid layout, selection geometry, filtering)
//! - `cache/` - Display caching for grid rows
//! - `io/` - Roster loading and the presence feed
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panels, input handling, and the selection overlay
//! - `rendering/` - Low-level card rendering
//! - `state/` - State management for roster, selection, and viewport

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

mod utils;
mod cache;
mod domain;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use domain::filtering;
use io::{PresenceFeed, RosterLoader};
use ui::input::shortcut_handler;
use ui::overlay::SelectionOverlay;
use ui::panel_manager::{PanelInteraction, PanelManager};
use ui::prefs_modal::{self, PrefsDraft, PrefsModalOutcome};

const SHOW_OFFLINE_KEY: &str = "show_offline";

/// Main application entry point that initializes and launches the Beacon GUI.
fn main() -> eframe::Result {
    let _ = simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    // Parse command-line arguments to check for an initial roster to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Beacon — Friend Presence"),
        ..Default::default()
    };

    eframe::run_native(
        "Beacon",
        options,
        Box::new(move |cc| Ok(Box::new(BeaconApp::new(cc, initial_file)))),
    )
}

/// The main Beacon application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles roster loading, presence events, and
///   selection bookkeeping
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct BeaconApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous roster loader
    loader: RosterLoader,
    /// Simulated presence feed
    feed: PresenceFeed,
    /// Visual selection overlay, shared with the store's change observer
    overlay: Rc<RefCell<SelectionOverlay>>,
    /// Draft of the preferences modal while it is open
    prefs_draft: Option<PrefsDraft>,
    /// Optional roster file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl BeaconApp {
    /// Creates a new app instance with theme and filter settings loaded
    /// from persistent storage. Optionally accepts an initial roster path.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let show_offline: bool =
            SettingsCoordinator::load_setting_or(cc.storage, SHOW_OFFLINE_KEY, true);

        let mut state = AppState::with_theme(current_theme_name);
        state.friends.set_show_offline(show_offline);

        // The overlay is independently-owned visual state; the store's
        // change observer only marks it stale, the actual resync happens
        // where the visible list is known.
        let overlay = Rc::new(RefCell::new(SelectionOverlay::new()));
        let observer_handle = Rc::clone(&overlay);
        state
            .selection
            .set_on_change(Some(Box::new(move || observer_handle.borrow_mut().mark_stale())));

        Self {
            state,
            loader: RosterLoader::new(),
            feed: PresenceFeed::new(),
            overlay,
            prefs_draft: None,
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: PanelInteraction,
        visible: &[beacon::Friend],
        ctx: &egui::Context,
    ) {
        match interaction {
            PanelInteraction::OpenRosterRequested(path) => {
                ApplicationCoordinator::open_roster_file(
                    &mut self.state,
                    &mut self.loader,
                    &mut self.feed,
                    path,
                    ctx,
                );
            }
            PanelInteraction::OpenVirtualRosterRequested => {
                ApplicationCoordinator::open_virtual_roster(
                    &mut self.state,
                    &mut self.loader,
                    &mut self.feed,
                    ctx,
                );
            }
            PanelInteraction::CardSelected { friend_id } => {
                ApplicationCoordinator::handle_card_selected(&mut self.state, &friend_id);
            }
            PanelInteraction::CardToggled { friend_id } => {
                ApplicationCoordinator::handle_card_toggled(&mut self.state, &friend_id);
            }
            PanelInteraction::RangeExtended { friend_id, additive } => {
                ApplicationCoordinator::handle_range_extended(
                    &mut self.state,
                    &friend_id,
                    additive,
                    visible,
                );
            }
            PanelInteraction::PreferencesRequested => {
                self.prefs_draft = Some(PrefsDraft::from_settings(
                    self.state.settings.settings(),
                    self.state.selection.selected(),
                ));
            }
            PanelInteraction::ClearSelectionRequested => {
                self.state.selection.clear_selection();
            }
        }
    }

    /// Renders the preferences modal while a draft is open.
    fn render_prefs_modal(&mut self, ctx: &egui::Context) {
        let Some(mut draft) = self.prefs_draft.take() else {
            return;
        };
        match prefs_modal::render_prefs_modal(ctx, &mut draft, self.state.selection.len()) {
            PrefsModalOutcome::Apply => {
                let template_override = draft.use_override.then_some(draft.template);
                ApplicationCoordinator::apply_preferences_to_selection(
                    &mut self.state,
                    draft.enabled,
                    draft.use_override,
                    template_override,
                );
            }
            PrefsModalOutcome::Cancel => {}
            PrefsModalOutcome::Open => {
                self.prefs_draft = Some(draft);
            }
        }
    }
}

impl eframe::App for BeaconApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            SHOW_OFFLINE_KEY,
            &self.state.friends.show_offline(),
        );
    }

    /// Main update loop: pumps async results and presence events, renders
    /// all panels, and routes interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up async roster loads and presence churn
        ApplicationCoordinator::check_loading_completion(
            &mut self.state,
            &mut self.loader,
            &mut self.feed,
            ctx,
        );
        ApplicationCoordinator::pump_presence_events(&mut self.state, &mut self.feed);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Load initial roster if specified via command line (first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_roster_file(
                &mut self.state,
                &mut self.loader,
                &mut self.feed,
                path,
                ctx,
            );
        }

        // The filtered, sorted list is both what renders and the range
        // list every selection operation resolves against.
        let visible = filtering::filter_friends(
            self.state.friends.friends(),
            self.state.friends.search_query(),
            self.state.friends.show_offline(),
        );

        if let Some(interaction) = PanelManager::render_all_panels(
            ctx,
            &mut self.state,
            &self.overlay,
            &visible,
            self.feed.is_running(),
        ) {
            self.handle_panel_interaction(interaction, &visible, ctx);
        }

        self.render_prefs_modal(ctx);

        shortcut_handler::handle_global_shortcuts(
            ctx,
            &mut self.state,
            &visible,
            self.prefs_draft.is_some(),
        );
    }
}
