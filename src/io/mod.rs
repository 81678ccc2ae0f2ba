//! I/O modules for roster loading and the presence feed.

pub mod roster_loader;
pub mod presence_feed;

// Re-export commonly used types
pub use roster_loader::{LoadResult, LoadingState, RosterLoader};
pub use presence_feed::PresenceFeed;
