//! Data model for the sock group.
//!
//! Records are stored as JSON text in the local store, using the same
//! camelCase field names the mobile app wrote, so an existing data file
//! keeps loading after an upgrade.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A member of the sock group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// Unique id, generated from the creation timestamp.
    pub id: String,
    /// Display name, trimmed and non-empty.
    pub name: String,
    /// Optional favourite-color tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Optional profile picture URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// A sock color, either built-in seed data or user-created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SockColor {
    /// Unique id. Built-ins use small decimal strings, custom colors
    /// use a `custom-` prefixed timestamp id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Normalized hex code: leading '#', 6 uppercase digits.
    pub hex_code: String,
    /// Whether this color belongs to the immutable built-in palette.
    #[serde(default)]
    pub is_default: bool,
}

/// The color designated for one calendar date.
///
/// The color is a snapshot, not a reference: removing a custom color from
/// the palette does not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyColor {
    /// Calendar date, `YYYY-MM-DD`, local time.
    pub date: String,
    /// The color picked for that date.
    pub color: SockColor,
}

/// Streak bookkeeping triple.
///
/// Persisted as three plain-string keys (`streakDays`, `lastShareDate`,
/// `consecutiveMissedDays`), written together in one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive share days, tolerating one grace day.
    pub streak_days: u32,
    /// Date of the last successful share, if any.
    pub last_share_date: Option<NaiveDate>,
    /// 1 while the streak is frozen by a single missed day, else 0.
    pub consecutive_missed_days: u32,
}

/// Generate a millisecond-timestamp id, the scheme the original data
/// format uses for friends and custom colors.
pub(crate) fn timestamp_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
