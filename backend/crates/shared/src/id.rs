//! Common ID Types
//!
//! Type-safe wrappers around the integer keys the store generates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper over a store-generated `i32`
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
///
/// let id = UserId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Raw key as stored in the database
    pub const fn value(&self) -> i32 {
        self.value
    }
}

// Manual impls so the marker type needs no derives of its own.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;
    pub struct Article;
    pub struct Comment;
}

pub type UserId = Id<markers::User>;
pub type ArticleId = Id<markers::Article>;
pub type CommentId = Id<markers::Comment>;
