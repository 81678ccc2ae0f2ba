//! Utility functions for formatting.

pub mod formatting;

pub use formatting::{format_memory_mb, format_relative_time, get_current_memory_mb, truncate_label};
