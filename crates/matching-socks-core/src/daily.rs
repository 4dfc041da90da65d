//! Today's-color resolver.
//!
//! Ensures exactly one color is associated with each calendar date,
//! drawing uniformly at random from the active palette on first lookup
//! and persisting the pick so repeated lookups within the same day are
//! idempotent.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CoreError, ValidationError};
use crate::model::{DailyColor, SockColor};
use crate::palette;
use crate::store::{keys, KvStore};

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn pick_random(colors: &[SockColor], rng: &mut impl Rng) -> Result<SockColor, ValidationError> {
    colors
        .choose(rng)
        .cloned()
        .ok_or(ValidationError::EmptyPalette)
}

/// The recorded daily-color history, oldest first.
///
/// Absent or corrupt history reads as empty.
pub fn history(store: &KvStore) -> Vec<DailyColor> {
    store.get_json(keys::DAILY_COLORS).unwrap_or_default()
}

/// Return the color for `today`, generating and persisting one if this
/// is the first lookup of the day.
pub fn today_color(
    store: &mut KvStore,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<SockColor, CoreError> {
    let key = date_key(today);
    let mut entries = history(store);

    if let Some(entry) = entries.iter().find(|dc| dc.date == key) {
        return Ok(entry.color.clone());
    }

    let color = pick_random(&palette::load(store), rng)?;
    entries.push(DailyColor {
        date: key,
        color: color.clone(),
    });
    store.set_json(keys::DAILY_COLORS, &entries)?;
    Ok(color)
}

/// Replace today's color with a fresh random pick.
///
/// Replace-or-append on the date key, so the one-entry-per-date
/// invariant holds even when no entry existed yet.
pub fn reroll(
    store: &mut KvStore,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<SockColor, CoreError> {
    let color = pick_random(&palette::load(store), rng)?;
    let key = date_key(today);
    let mut entries = history(store);

    match entries.iter_mut().find(|dc| dc.date == key) {
        Some(entry) => entry.color = color.clone(),
        None => entries.push(DailyColor {
            date: key,
            color: color.clone(),
        }),
    }
    store.set_json(keys::DAILY_COLORS, &entries)?;
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn temp_store() -> (tempfile::TempDir, KvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("store.json"));
        (dir, store)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn resolver_is_idempotent_within_a_day() {
        let (_dir, mut store) = temp_store();
        let mut rng = Pcg64::seed_from_u64(7);
        let today = date("2024-01-01");

        let first = today_color(&mut store, today, &mut rng).unwrap();
        let second = today_color(&mut store, today, &mut rng).unwrap();

        assert_eq!(first, second);
        assert_eq!(history(&store).len(), 1);
    }

    #[test]
    fn distinct_days_get_their_own_entries() {
        let (_dir, mut store) = temp_store();
        let mut rng = Pcg64::seed_from_u64(7);

        today_color(&mut store, date("2024-01-01"), &mut rng).unwrap();
        today_color(&mut store, date("2024-01-02"), &mut rng).unwrap();

        let entries = history(&store);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, "2024-01-01");
        assert_eq!(entries[1].date, "2024-01-02");
    }

    #[test]
    fn pick_comes_from_the_palette() {
        let (_dir, mut store) = temp_store();
        let mut rng = Pcg64::seed_from_u64(42);
        let color = today_color(&mut store, date("2024-01-01"), &mut rng).unwrap();
        assert!(palette::load(&store).contains(&color));
    }

    #[test]
    fn reroll_replaces_instead_of_appending() {
        let (_dir, mut store) = temp_store();
        let today = date("2024-01-01");
        let mut rng = Pcg64::seed_from_u64(7);
        today_color(&mut store, today, &mut rng).unwrap();

        let mut rng2 = Pcg64::seed_from_u64(8);
        let rerolled = reroll(&mut store, today, &mut rng2).unwrap();

        let entries = history(&store);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].color, rerolled);
    }

    #[test]
    fn reroll_on_empty_history_appends() {
        let (_dir, mut store) = temp_store();
        let mut rng = Pcg64::seed_from_u64(7);
        reroll(&mut store, date("2024-01-01"), &mut rng).unwrap();
        assert_eq!(history(&store).len(), 1);
    }

    #[test]
    fn empty_palette_is_an_error() {
        let (_dir, mut store) = temp_store();
        palette::save(&mut store, &[]).unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        let result = today_color(&mut store, date("2024-01-01"), &mut rng);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::EmptyPalette))
        ));
        // No history entry was written.
        assert!(history(&store).is_empty());
    }
}
