use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::{IndexMap, IndexSet};
use log::debug;

use super::{DictionaryService, Item, Membership, Removal};

/// Key -> insertion-ordered set of distinct members.
type Entries = IndexMap<String, IndexSet<String>>;

/// An in-memory multi-value dictionary.
///
/// The whole mapping sits behind a single `RwLock`: queries share a
/// read lock and return owned snapshots, while every mutation
/// (including its existence checks) runs under one write lock, so
/// check-then-act sequences are atomic with respect to other clones.
///
/// Keys and members keep insertion order. Empty strings are accepted
/// as ordinary keys and members.
#[derive(Clone, Default)]
pub struct MultiValueDictionary {
    entries: Arc<RwLock<Entries>>,
}

impl MultiValueDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the dictionary holds no keys.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns the total number of members across all keys.
    pub fn member_count(&self) -> usize {
        self.read().values().map(IndexSet::len).sum()
    }

    // Mutations never leave the map half-updated, so a poisoned lock
    // still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Removes `key` if its member set is empty.
///
/// Must run after every member removal. Returns `true` if the key was
/// removed.
fn prune_empty_key(entries: &mut Entries, key: &str) -> bool {
    if entries.get(key).is_some_and(IndexSet::is_empty) {
        entries.shift_remove(key);
        debug!("Pruned key {key} with no remaining members");
        true
    } else {
        false
    }
}

/// Asserts that no key maps to an empty member set.
fn debug_assert_invariants(entries: &Entries) {
    debug_assert!(
        entries.values().all(|members| !members.is_empty()),
        "dictionary holds a key with no members"
    );
}

impl DictionaryService for MultiValueDictionary {
    fn list_keys(&self) -> Option<Vec<String>> {
        let entries = self.read();
        if entries.is_empty() {
            None
        } else {
            Some(entries.keys().cloned().collect())
        }
    }

    fn list_members(&self, key: &str) -> Option<Vec<String>> {
        self.read()
            .get(key)
            .map(|members| members.iter().cloned().collect())
    }

    fn add_member(&self, key: &str, member: &str) -> bool {
        let mut entries = self.write();
        let added = match entries.get_mut(key) {
            Some(members) => {
                if members.contains(member) {
                    false
                } else {
                    members.insert(member.to_owned())
                }
            }
            None => {
                entries.insert(key.to_owned(), IndexSet::from([member.to_owned()]));
                true
            }
        };
        debug!("add {key} {member}: {added}");
        debug_assert_invariants(&entries);
        added
    }

    fn remove_member(&self, key: &str, member: &str) -> Removal {
        let mut entries = self.write();
        let Some(members) = entries.get_mut(key) else {
            return Removal::KeyAbsent;
        };
        if !members.shift_remove(member) {
            return Removal::MemberAbsent;
        }
        prune_empty_key(&mut entries, key);
        debug!("Removed {member} from {key}");
        debug_assert_invariants(&entries);
        Removal::Removed
    }

    fn remove_key(&self, key: &str) -> bool {
        let removed = self.write().shift_remove(key).is_some();
        if removed {
            debug!("Removed key {key}");
        }
        removed
    }

    fn clear_all(&self) {
        let mut entries = self.write();
        debug!("Clearing {} keys", entries.len());
        entries.clear();
    }

    fn key_exists(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    fn member_exists(&self, key: &str, member: &str) -> Membership {
        match self.read().get(key) {
            None => Membership::KeyAbsent,
            Some(members) if members.contains(member) => Membership::Present,
            Some(_) => Membership::Absent,
        }
    }

    fn list_all_members(&self) -> Vec<String> {
        self.read().values().flatten().cloned().collect()
    }

    fn list_all_items(&self) -> Vec<Item> {
        self.read()
            .iter()
            .map(|(key, members)| Item {
                key: key.clone(),
                members: members.iter().cloned().collect(),
            })
            .collect()
    }
}
