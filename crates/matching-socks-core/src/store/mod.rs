mod config;
mod kv;

pub use config::Config;
pub use kv::KvStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Storage keys, matching the layout the original app persisted.
pub mod keys {
    /// Ordered sequence of `Friend`, JSON.
    pub const FRIENDS: &str = "friends";
    /// Ordered sequence of `SockColor`, JSON. Absent means the default palette.
    pub const COLORS: &str = "colors";
    /// Ordered sequence of `DailyColor`, JSON.
    pub const DAILY_COLORS: &str = "daily_colors";
    /// Presence/absence sentinel. Absent means first run.
    pub const IS_FIRST_TIME: &str = "is_first_time";
    /// Plain string URI.
    pub const GROUP_PICTURE: &str = "group_picture";
    /// Plain string integer.
    pub const STREAK_DAYS: &str = "streakDays";
    /// Plain string date (`YYYY-MM-DD`) or empty.
    pub const LAST_SHARE_DATE: &str = "lastShareDate";
    /// Plain string integer.
    pub const CONSECUTIVE_MISSED_DAYS: &str = "consecutiveMissedDays";

    /// Every key the app owns, for full-reset flows.
    pub const ALL: &[&str] = &[
        FRIENDS,
        COLORS,
        DAILY_COLORS,
        IS_FIRST_TIME,
        GROUP_PICTURE,
        STREAK_DAYS,
        LAST_SHARE_DATE,
        CONSECUTIVE_MISSED_DAYS,
    ];
}

/// Returns `~/.config/matching-socks[-dev]/` based on MATCHING_SOCKS_ENV.
///
/// Set MATCHING_SOCKS_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MATCHING_SOCKS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("matching-socks-dev")
    } else {
        base_dir.join("matching-socks")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
