//! Desired-value container for declarative configuration fields.
//!
//! Distinguishes "the caller never mentioned this field" from "the caller
//! explicitly set this field" — including explicitly setting it to an empty
//! collection or to null.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A declarative configuration field that is either explicitly set or
/// left unspecified.
///
/// `Desired` is deliberately not `Option`: `Set(vec![])` and `Unset` mean
/// different things during a merge. A set empty collection overwrites the
/// remote collection with an empty one; an unset field leaves the remote
/// value untouched. Fields the remote API itself treats as nullable use
/// `Desired<Option<T>>`, which yields the full three-way range of
/// unset / known-absent / known-present.
///
/// Deserialization always produces `Set`; combined with `#[serde(default)]`
/// on the containing struct field, an omitted field maps to `Unset` and a
/// provided field (including an explicit empty value) maps to `Set`.
///
/// # Example
///
/// ```
/// use meshplane_core::Desired;
///
/// let name: Desired<String> = Desired::Set("office".to_string());
/// let peers: Desired<Vec<String>> = Desired::Unset;
///
/// assert_eq!(name.resolve(&"old".to_string()), "office");
/// assert_eq!(peers.resolve(&vec!["p1".to_string()]), vec!["p1".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Desired<T> {
    /// The caller did not specify this field; the remote value is kept.
    Unset,
    /// The caller explicitly provided this value; it replaces the remote
    /// value, even when empty.
    Set(T),
}

impl<T> Desired<T> {
    /// Check whether this field was explicitly set.
    pub fn is_set(&self) -> bool {
        matches!(self, Desired::Set(_))
    }

    /// Check whether this field was left unspecified.
    pub fn is_unset(&self) -> bool {
        matches!(self, Desired::Unset)
    }

    /// Get a reference to the set value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Desired::Set(value) => Some(value),
            Desired::Unset => None,
        }
    }

    /// Get a reference to the set value.
    ///
    /// # Panics
    ///
    /// Panics if the field is unset. Callers must check `is_set` first;
    /// reaching this panic is a programming error in the caller, not a
    /// runtime data condition.
    pub fn value(&self) -> &T {
        match self {
            Desired::Set(value) => value,
            Desired::Unset => panic!("value() called on an unset field"),
        }
    }

    /// Convert to a `Desired` over a reference.
    pub fn as_ref(&self) -> Desired<&T> {
        match self {
            Desired::Set(value) => Desired::Set(value),
            Desired::Unset => Desired::Unset,
        }
    }

    /// Map the set value, preserving `Unset`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Desired<U> {
        match self {
            Desired::Set(value) => Desired::Set(f(value)),
            Desired::Unset => Desired::Unset,
        }
    }

    /// Convert into an `Option`, discarding the set/unset distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Desired::Set(value) => Some(value),
            Desired::Unset => None,
        }
    }
}

impl<T: Clone> Desired<T> {
    /// Merge this field against the authoritative remote value.
    ///
    /// Returns the set value when one was provided, otherwise the remote
    /// value unchanged. This is the single per-field rule every entity
    /// merge is built from; collection-typed fields get whole-collection
    /// replacement for free because the set value is returned verbatim.
    pub fn resolve(&self, remote: &T) -> T {
        match self {
            Desired::Set(value) => value.clone(),
            Desired::Unset => remote.clone(),
        }
    }
}

impl<T> Default for Desired<T> {
    fn default() -> Self {
        Desired::Unset
    }
}

impl<T> From<Option<T>> for Desired<T> {
    /// Map a caller-omitted value (`None`) to `Unset` and a provided value
    /// to `Set`.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Desired::Set(value),
            None => Desired::Unset,
        }
    }
}

impl<T: Serialize> Serialize for Desired<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Desired::Set(value) => value.serialize(serializer),
            Desired::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Desired<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Desired::Set)
    }
}
