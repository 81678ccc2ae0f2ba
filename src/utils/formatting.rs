//! Text formatting utilities for the Beacon GUI.
//!
//! This module provides helper functions for formatting values in a human-readable way.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats how long ago a unix-second timestamp was, relative to `now`.
///
/// Granularity is minutes up to an hour, hours up to a day, days beyond;
/// anything under a minute (or in the future, from clock skew) reads
/// "just now".
pub fn format_relative_time(now: i64, then: i64) -> String {
    let elapsed = now - then;
    if elapsed < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Truncates a string to `max_chars`, appending an ellipsis when cut.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_time_buckets() {
        let now = 1_700_000_000;
        assert_eq!(format_relative_time(now, now - 5), "just now");
        assert_eq!(format_relative_time(now, now - 90), "1m ago");
        assert_eq!(format_relative_time(now, now - 3_600), "1h ago");
        assert_eq!(format_relative_time(now, now - 7_200), "2h ago");
        assert_eq!(format_relative_time(now, now - 172_800), "2d ago");
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        assert_eq!(format_relative_time(100, 200), "just now");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("a very long name", 8), "a very …");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
