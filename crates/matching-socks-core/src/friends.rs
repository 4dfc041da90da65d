//! Friend list management.
//!
//! An ordered list stored as one JSON sequence. Names are trimmed and
//! must be non-empty; there is no rename, only add and remove.

use crate::error::{CoreError, StoreError, ValidationError};
use crate::model::{timestamp_id, Friend};
use crate::store::{keys, KvStore};

/// Load the friend list. Absent or corrupt data reads as empty.
pub fn load(store: &KvStore) -> Vec<Friend> {
    store.get_json(keys::FRIENDS).unwrap_or_default()
}

/// Persist the friend list, preserving order.
pub fn save(store: &mut KvStore, friends: &[Friend]) -> Result<(), StoreError> {
    store.set_json(keys::FRIENDS, &friends)
}

/// Add a friend by name. The id is generated from the creation
/// timestamp, bumped on collision so rapid adds stay unique.
pub fn add(store: &mut KvStore, name: &str) -> Result<Friend, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyFriendName.into());
    }

    let mut friends = load(store);
    let mut id = timestamp_id();
    while friends.iter().any(|f| f.id == id.to_string()) {
        id += 1;
    }
    let friend = Friend {
        id: id.to_string(),
        name: name.to_string(),
        color: None,
        profile_picture: None,
    };
    friends.push(friend.clone());
    save(store, &friends)?;
    Ok(friend)
}

/// Remove a friend by id.
pub fn remove(store: &mut KvStore, id: &str) -> Result<(), CoreError> {
    let mut friends = load(store);
    let Some(pos) = friends.iter().position(|f| f.id == id) else {
        return Err(ValidationError::UnknownFriend(id.to_string()).into());
    };
    friends.remove(pos);
    save(store, &friends)?;
    Ok(())
}
