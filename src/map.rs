//! Ordered map type with case-insensitive keys.
//!
//! This module provides [`ValueMap`], a wrapper around [`IndexMap`] keyed by
//! [`CaselessKey`]. Lookups ignore letter case; iteration preserves insertion
//! order; the casing of the first insertion of a key is what serializes back
//! out.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::{ValueMap, Value};
//!
//! let mut map = ValueMap::new();
//! map.insert("StartUrl", Value::from("https://example.com"));
//!
//! // Lookup succeeds regardless of the casing used
//! assert!(map.get("starturl").is_some());
//! assert!(map.get("STARTURL").is_some());
//! assert_eq!(map.len(), 1);
//! ```

use crate::key::{Caseless, CaselessKey};
use crate::Value;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An insertion-ordered map of case-insensitive keys to values.
///
/// Inserting under a key that already exists (in any casing) replaces the
/// value — last write wins — while the originally inserted casing is kept
/// for display and serialization.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{ValueMap, Value};
///
/// let mut map = ValueMap::new();
/// map.insert("Width", Value::from(800));
/// map.insert("width", Value::from(1024)); // same key, replaces
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("WIDTH").and_then(|v| v.as_i64()), Some(1024));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(IndexMap<CaselessKey, Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Keys collide case-insensitively; the old value is returned when one
    /// was replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lax::{ValueMap, Value};
    ///
    /// let mut map = ValueMap::new();
    /// assert!(map.insert("key", Value::from(1)).is_none());
    /// assert!(map.insert("KEY", Value::from(2)).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<CaselessKey>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value for `key`, ignoring letter case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&Caseless(key))
    }

    /// Returns `true` if the map contains `key` in any casing.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&Caseless(key))
    }

    /// Removes `key` (any casing) from the map, returning its value.
    ///
    /// Preserves the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(&Caseless(key))
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, CaselessKey, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, CaselessKey, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, CaselessKey, Value> {
        self.0.iter()
    }
}

impl IntoIterator for ValueMap {
    type Item = (CaselessKey, Value);
    type IntoIter = indexmap::map::IntoIter<CaselessKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a CaselessKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, CaselessKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<CaselessKey>> FromIterator<(K, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        ValueMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<CaselessKey>> Extend<(K, Value)> for ValueMap {
    fn extend<T: IntoIterator<Item = (K, Value)>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl fmt::Display for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:?}:{}", key.as_str(), value)?;
        }
        f.write_str("}")
    }
}

// Keys round-trip as plain case-preserving text; only the values go through
// the value model.
impl Serialize for ValueMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueMapVisitor;

        impl<'de> Visitor<'de> for ValueMapVisitor {
            type Value = ValueMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = ValueMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    // Null entries are dropped on ingestion, same as
                    // normalization.
                    if !value.is_null() {
                        map.insert(key, value);
                    }
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ValueMapVisitor)
    }
}
