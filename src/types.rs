//! Shared types used across the codebase

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A relation slot on a record: either the persistence layer resolved it
/// before handing the record over, or it did not. Projection reads this state
/// to decide between omitting the key and emitting the loaded value.
///
/// Nullable to-one relations are `Relation<Option<T>>`, which gives the three
/// observable states a document can show: key absent (`NotLoaded`), explicit
/// null (`Loaded(None)`) and an object (`Loaded(Some(_))`). Collections are
/// `Relation<Vec<T>>`; loaded-but-empty is an empty list, never null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation<T> {
    NotLoaded,
    Loaded(T),
}

impl<T> Relation<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Relation::Loaded(_))
    }

    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Relation::NotLoaded)
    }

    /// The loaded value, if any. `None` means the relation was never fetched,
    /// not that it was fetched and came back empty.
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Relation::Loaded(value) => Some(value),
            Relation::NotLoaded => None,
        }
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Relation::NotLoaded
    }
}

impl<T> From<T> for Relation<T> {
    fn from(value: T) -> Self {
        Relation::Loaded(value)
    }
}

// Serialized transparently as the loaded value. Record fields pair this with
// `#[serde(default, skip_serializing_if = "Relation::is_not_loaded")]` so the
// record's own serde output follows the same omit-key / explicit-null rules
// as the projected documents.
impl<T: Serialize> Serialize for Relation<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Relation::Loaded(value) => value.serialize(serializer),
            Relation::NotLoaded => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Relation<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Relation::Loaded)
    }
}
