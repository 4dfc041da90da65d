//! Group picture, onboarding sentinel, and full reset.
//!
//! The group picture is a single opaque URI handed over by whatever
//! image-picking surface the frontend uses. First-run detection is
//! presence/absence of the `is_first_time` key: absent means first run.

use crate::error::StoreError;
use crate::store::{keys, KvStore};

/// The stored group picture URI, if one was set.
pub fn group_picture(store: &KvStore) -> Option<String> {
    store.get(keys::GROUP_PICTURE).map(str::to_string)
}

/// Store a group picture URI. At most one per installation.
pub fn set_group_picture(store: &mut KvStore, uri: &str) -> Result<(), StoreError> {
    store.set(keys::GROUP_PICTURE, uri)
}

/// Remove the group picture.
pub fn clear_group_picture(store: &mut KvStore) -> Result<(), StoreError> {
    store.remove(keys::GROUP_PICTURE)
}

/// Whether this is the first run (sentinel key absent).
pub fn is_first_time(store: &KvStore) -> bool {
    !store.contains(keys::IS_FIRST_TIME)
}

/// Mark onboarding as done.
pub fn complete_onboarding(store: &mut KvStore) -> Result<(), StoreError> {
    store.set(keys::IS_FIRST_TIME, "false")
}

/// Put the app back into the first-run state without touching data.
pub fn reset_onboarding(store: &mut KvStore) -> Result<(), StoreError> {
    store.remove(keys::IS_FIRST_TIME)
}

/// Full app reset: remove every key the app owns in one batched write.
pub fn reset_all(store: &mut KvStore) -> Result<(), StoreError> {
    store.remove_many(keys::ALL.iter().copied())
}
