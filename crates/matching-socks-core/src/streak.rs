//! Daily sharing streak engine.
//!
//! Pure decision logic over `(last_share_date, streak_days,
//! consecutive_missed_days)` plus a thin persistence wrapper. The policy
//! is a deliberate leniency/strictness split: missing exactly one
//! calendar day freezes the streak (a grace day), missing two or more
//! resets it.
//!
//! The triple is written through a single batched store write so all
//! three keys land together.

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::StreakState;
use crate::store::{keys, KvStore};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Passive check, run on load rather than on a share.
///
/// Decides whether elapsed time alone freezes or resets the streak:
/// - no prior share, or shared today: unchanged
/// - one day since the last share: streak frozen, missed-days set to 1
/// - two or more days: streak and missed-days reset to 0
pub fn passive_check(state: &StreakState, today: NaiveDate) -> StreakState {
    let Some(last) = state.last_share_date else {
        return *state;
    };
    match (today - last).num_days() {
        0 => *state,
        1 => StreakState {
            consecutive_missed_days: 1,
            ..*state
        },
        gap if gap >= 2 => StreakState {
            streak_days: 0,
            consecutive_missed_days: 0,
            ..*state
        },
        // Clock moved backwards; leave the state alone.
        _ => *state,
    }
}

/// Active update, run only after a successful share.
///
/// - already shared today: unchanged (a second share is a no-op)
/// - first share ever: streak starts at 1
/// - one day gap: streak continues, +1 (grace day)
/// - two or more days: streak restarts at 1
///
/// Every changing branch stamps `last_share_date = today` and zeroes
/// `consecutive_missed_days`.
pub fn record_share(state: &StreakState, today: NaiveDate) -> StreakState {
    match state.last_share_date {
        Some(last) if last == today => *state,
        Some(last) => {
            let streak_days = match (today - last).num_days() {
                1 => state.streak_days + 1,
                gap if gap >= 2 => 1,
                // Different date but non-positive gap (clock moved
                // backwards): count it as a normal increment.
                _ => state.streak_days + 1,
            };
            StreakState {
                streak_days,
                last_share_date: Some(today),
                consecutive_missed_days: 0,
            }
        }
        None => StreakState {
            streak_days: 1,
            last_share_date: Some(today),
            consecutive_missed_days: 0,
        },
    }
}

/// Load the streak triple from the store.
///
/// Unparsable counters read as 0 and an empty or malformed date reads as
/// absent. A streak with no last-share date is normalized to 0.
pub fn load(store: &KvStore) -> StreakState {
    let streak_days = store
        .get(keys::STREAK_DAYS)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let last_share_date = store
        .get(keys::LAST_SHARE_DATE)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok());
    let consecutive_missed_days = store
        .get(keys::CONSECUTIVE_MISSED_DAYS)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let mut state = StreakState {
        streak_days,
        last_share_date,
        consecutive_missed_days,
    };
    if state.last_share_date.is_none() {
        state.streak_days = 0;
    }
    state
}

/// Persist the triple as the three plain-string keys, in one batch.
pub fn persist(store: &mut KvStore, state: &StreakState) -> Result<(), StoreError> {
    let date = state
        .last_share_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    store.set_many([
        (keys::STREAK_DAYS, state.streak_days.to_string()),
        (keys::LAST_SHARE_DATE, date),
        (
            keys::CONSECUTIVE_MISSED_DAYS,
            state.consecutive_missed_days.to_string(),
        ),
    ])
}

/// Run the passive check against the stored state, persisting only when
/// something changed.
pub fn check_on_load(store: &mut KvStore, today: NaiveDate) -> Result<StreakState, StoreError> {
    let state = load(store);
    let checked = passive_check(&state, today);
    if checked != state {
        if let Err(e) = persist(store, &checked) {
            log::error!("failed to persist streak check: {e}");
            return Err(e);
        }
    }
    Ok(checked)
}

/// Record a successful share against the stored state.
///
/// The updated state is computed first; a persistence failure is logged
/// and returned, but the computed state is not rolled back in memory.
pub fn share(store: &mut KvStore, today: NaiveDate) -> Result<StreakState, StoreError> {
    let state = load(store);
    let updated = record_share(&state, today);
    if updated != state {
        if let Err(e) = persist(store, &updated) {
            log::error!("failed to persist streak update: {e}");
            return Err(e);
        }
    }
    Ok(updated)
}

/// Explicit reset back to the first-run state.
pub fn reset(store: &mut KvStore) -> Result<StreakState, StoreError> {
    let state = StreakState::default();
    persist(store, &state)?;
    Ok(state)
}
