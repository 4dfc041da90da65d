//! Explicit application context.
//!
//! `SockApp` owns the opened store and configuration and exposes every
//! domain operation as a method, so frontends construct one context and
//! pass it down instead of reaching for ambient global state. Operations
//! that depend on "today" take the date explicitly; the convenience
//! wrappers ending in `_now` use the local calendar date.

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::model::{DailyColor, Friend, SockColor, StreakState};
use crate::store::{Config, KvStore};
use crate::{daily, friends, group, palette, streak};

/// One opened Matching Socks installation.
pub struct SockApp {
    store: KvStore,
    config: Config,
}

impl SockApp {
    /// Open the app against the configured store location.
    pub fn open() -> Result<Self> {
        let config = Config::load_or_default();
        let store = match &config.store_file {
            Some(path) => KvStore::open(path.clone()),
            None => KvStore::open_default()?,
        };
        Ok(Self { store, config })
    }

    /// Build a context around an already-opened store. Used by tests and
    /// embedding frontends that manage their own paths.
    pub fn with_store(store: KvStore) -> Self {
        Self {
            store,
            config: Config::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    // Friends

    pub fn friends(&self) -> Vec<Friend> {
        friends::load(&self.store)
    }

    pub fn add_friend(&mut self, name: &str) -> Result<Friend> {
        friends::add(&mut self.store, name)
    }

    pub fn remove_friend(&mut self, id: &str) -> Result<()> {
        friends::remove(&mut self.store, id)
    }

    // Palette

    pub fn palette(&self) -> Vec<SockColor> {
        palette::load(&self.store)
    }

    pub fn add_custom_color(&mut self, name: &str, hex: &str) -> Result<SockColor> {
        palette::add_custom(&mut self.store, name, hex)
    }

    pub fn remove_color(&mut self, id: &str) -> Result<()> {
        palette::remove(&mut self.store, id)
    }

    // Daily color

    pub fn today_color(&mut self, today: NaiveDate) -> Result<SockColor> {
        daily::today_color(&mut self.store, today, &mut rand::thread_rng())
    }

    pub fn today_color_now(&mut self) -> Result<SockColor> {
        self.today_color(Self::today())
    }

    pub fn reroll_today(&mut self, today: NaiveDate) -> Result<SockColor> {
        daily::reroll(&mut self.store, today, &mut rand::thread_rng())
    }

    pub fn color_history(&self) -> Vec<DailyColor> {
        daily::history(&self.store)
    }

    // Streak

    pub fn streak(&self) -> StreakState {
        streak::load(&self.store)
    }

    /// Passive check on load: freeze or reset based on elapsed days.
    pub fn check_streak(&mut self, today: NaiveDate) -> Result<StreakState> {
        Ok(streak::check_on_load(&mut self.store, today)?)
    }

    /// Active update after a successful share.
    pub fn record_share(&mut self, today: NaiveDate) -> Result<StreakState> {
        Ok(streak::share(&mut self.store, today)?)
    }

    pub fn reset_streak(&mut self) -> Result<StreakState> {
        Ok(streak::reset(&mut self.store)?)
    }

    // Group & onboarding

    pub fn group_picture(&self) -> Option<String> {
        group::group_picture(&self.store)
    }

    pub fn set_group_picture(&mut self, uri: &str) -> Result<()> {
        Ok(group::set_group_picture(&mut self.store, uri)?)
    }

    pub fn clear_group_picture(&mut self) -> Result<()> {
        Ok(group::clear_group_picture(&mut self.store)?)
    }

    pub fn is_first_time(&self) -> bool {
        group::is_first_time(&self.store)
    }

    pub fn complete_onboarding(&mut self) -> Result<()> {
        Ok(group::complete_onboarding(&mut self.store)?)
    }

    pub fn reset_all(&mut self) -> Result<()> {
        Ok(group::reset_all(&mut self.store)?)
    }

    /// Today's local calendar date.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_app() -> (tempfile::TempDir, SockApp) {
        let dir = tempfile::tempdir().unwrap();
        let app = SockApp::with_store(KvStore::open(dir.path().join("store.json")));
        (dir, app)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn share_flow_end_to_end() {
        let (_dir, mut app) = temp_app();
        assert!(app.is_first_time());

        app.complete_onboarding().unwrap();
        app.add_friend("Ada").unwrap();
        let color = app.today_color(date("2024-01-01")).unwrap();
        assert!(app.palette().contains(&color));

        let state = app.record_share(date("2024-01-01")).unwrap();
        assert_eq!(state.streak_days, 1);

        let state = app.record_share(date("2024-01-02")).unwrap();
        assert_eq!(state.streak_days, 2);

        // Two missed days: passive check resets.
        let state = app.check_streak(date("2024-01-05")).unwrap();
        assert_eq!(state.streak_days, 0);
    }

    #[test]
    fn reset_all_clears_everything() {
        let (_dir, mut app) = temp_app();
        app.add_friend("Ada").unwrap();
        app.record_share(date("2024-01-01")).unwrap();
        app.reset_all().unwrap();

        assert!(app.friends().is_empty());
        assert_eq!(app.streak(), StreakState::default());
        assert!(app.is_first_time());
    }
}
