use std::fmt;

/// Trait for a multi-value dictionary service.
///
/// A dictionary maps a string key to an insertion-ordered set of
/// distinct string members. A key exists only while it has at least
/// one member.
///
/// Services must be cloneable (cheaply, via `Arc`) and safe to send
/// across threads. Every clone is a handle to the same dictionary.
pub trait DictionaryService: Clone + Send + 'static {
    /// Returns all keys in insertion order, or `None` if there are none.
    fn list_keys(&self) -> Option<Vec<String>>;

    /// Returns the members of `key` in insertion order.
    ///
    /// Returns `None` if the key does not exist. Never creates the key.
    fn list_members(&self, key: &str) -> Option<Vec<String>>;

    /// Adds `member` to `key`, creating the key if it is absent.
    ///
    /// Returns `false` if the member already existed for the key.
    fn add_member(&self, key: &str, member: &str) -> bool;

    /// Removes `member` from `key`.
    ///
    /// Removing the last member of a key removes the key itself.
    fn remove_member(&self, key: &str, member: &str) -> Removal;

    /// Removes `key` and all of its members.
    ///
    /// Returns `false` if the key did not exist.
    fn remove_key(&self, key: &str) -> bool;

    /// Removes every key and member unconditionally.
    fn clear_all(&self);

    /// Returns whether `key` exists.
    fn key_exists(&self, key: &str) -> bool;

    /// Returns whether `member` exists for `key`.
    fn member_exists(&self, key: &str, member: &str) -> Membership;

    /// Returns every member of every key, in key order then member order.
    ///
    /// The same member may appear more than once if it belongs to
    /// several keys.
    fn list_all_members(&self) -> Vec<String>;

    /// Returns every key together with its members, in key order.
    fn list_all_items(&self) -> Vec<Item>;
}

/// Outcome of [`DictionaryService::remove_member`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The key does not exist.
    KeyAbsent,
    /// The key exists but does not contain the member.
    MemberAbsent,
    /// The member was removed.
    Removed,
}

/// Outcome of [`DictionaryService::member_exists`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// The key does not exist.
    KeyAbsent,
    /// The key exists but does not contain the member.
    Absent,
    /// The key contains the member.
    Present,
}

impl Membership {
    /// Returns `Some(is_present)` for an existing key, `None` otherwise.
    pub fn for_existing_key(self) -> Option<bool> {
        match self {
            Membership::KeyAbsent => None,
            Membership::Absent => Some(false),
            Membership::Present => Some(true),
        }
    }
}

/// A key together with a snapshot of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The key.
    pub key: String,
    /// The members of the key, in insertion order.
    pub members: Vec<String>,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.key, self.members.join(", "))
    }
}

mod dictionary;

pub use self::dictionary::MultiValueDictionary;
