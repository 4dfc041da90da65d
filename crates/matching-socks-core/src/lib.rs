//! # Matching Socks Core Library
//!
//! Core business logic for Matching Socks, a local-first "color of the
//! day" tracker for a small group of friends. All state lives on-device
//! in a JSON-backed key-value store; the CLI (and any other frontend) is
//! a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Local Store**: a durable string-to-string mapping backed by a
//!   single JSON file; structured records are JSON text, counters and
//!   URIs are plain strings
//! - **Streak Engine**: pure date arithmetic deciding whether a sharing
//!   streak continues, freezes for one grace day, or resets
//! - **Today's-Color Resolver**: one uniformly random palette pick per
//!   calendar date, cached in the store
//!
//! ## Key Components
//!
//! - [`SockApp`]: explicitly constructed application context
//! - [`KvStore`]: the local key-value store
//! - [`StreakState`]: the persisted streak triple
//! - [`Config`]: TOML application configuration

pub mod app;
pub mod daily;
pub mod error;
pub mod friends;
pub mod group;
pub mod model;
pub mod palette;
pub mod store;
pub mod streak;

pub use app::SockApp;
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use model::{DailyColor, Friend, SockColor, StreakState};
pub use store::{data_dir, keys, Config, KvStore};
