pub mod traits;
pub mod model;
pub mod roster_reader;
pub mod virtual_roster;
pub mod settings;
pub mod notifications;
pub mod theme;

// Export traits
pub use traits::RosterReader;

// Export roster model
pub use model::{
    Friend, PresenceEvent, PresenceOutcome, PresenceUpdate, Roster, UserStatus, apply_presence,
    merge_friends, sort_friends,
};

// Export roster sources
pub use roster_reader::JsonRosterReader;
pub use virtual_roster::{VirtualRosterReader, now_unix};

// Export settings
pub use settings::{AppSettings, FriendPreference, SettingsStore};

// Export notifications
pub use notifications::{Notification, is_online_transition, render_template};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
