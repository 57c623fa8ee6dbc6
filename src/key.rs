//! Case-insensitive, case-preserving map keys.
//!
//! This module provides [`CaselessKey`], the key type used by
//! [`ValueMap`](crate::ValueMap). Two keys compare and hash equal whenever
//! they differ only by letter case, while the original casing is preserved
//! for display and serialization.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::CaselessKey;
//!
//! let a = CaselessKey::new("Width");
//! let b = CaselessKey::new("WIDTH");
//!
//! assert_eq!(a, b);
//! assert_eq!(a.as_str(), "Width"); // display casing untouched
//! assert_eq!(b.as_str(), "WIDTH");
//! ```

use indexmap::Equivalent;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string key with case-insensitive equality and hashing.
///
/// Comparison and hashing use the Unicode simple lowercase fold, so
/// `"Color"`, `"color"`, and `"COLOR"` are all the same key. The text passed
/// at construction is kept verbatim and is what [`as_str`](Self::as_str),
/// `Display`, and serialization produce.
///
/// # Examples
///
/// ```rust
/// use serde_lax::CaselessKey;
/// use std::collections::HashSet;
///
/// let mut seen = HashSet::new();
/// seen.insert(CaselessKey::new("Left"));
/// assert!(seen.contains(&CaselessKey::new("left")));
/// ```
#[derive(Clone, Debug)]
pub struct CaselessKey {
    text: String,
}

impl CaselessKey {
    /// Creates a key, preserving the given casing for display.
    pub fn new(text: impl Into<String>) -> Self {
        CaselessKey { text: text.into() }
    }

    /// Returns the key text in its original casing.
    ///
    /// The fold used for comparison is never observable here.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the key, returning the original text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

fn folded_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn hash_folded<H: Hasher>(s: &str, state: &mut H) {
    for ch in folded_chars(s) {
        state.write_u32(ch as u32);
    }
    // Length terminator so "ab"+"c" and "a"+"bc" style splits cannot collide
    // across composite hashes.
    state.write_u8(0xff);
}

impl PartialEq for CaselessKey {
    fn eq(&self, other: &Self) -> bool {
        folded_chars(&self.text).eq(folded_chars(&other.text))
    }
}

impl Eq for CaselessKey {}

impl Hash for CaselessKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(&self.text, state);
    }
}

impl fmt::Display for CaselessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for CaselessKey {
    fn from(text: &str) -> Self {
        CaselessKey::new(text)
    }
}

impl From<String> for CaselessKey {
    fn from(text: String) -> Self {
        CaselessKey::new(text)
    }
}

impl From<CaselessKey> for String {
    fn from(key: CaselessKey) -> Self {
        key.text
    }
}

/// Borrowed lookup form of [`CaselessKey`].
///
/// Hashes and compares exactly like an owned key, so map lookups by `&str`
/// need no allocation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Caseless<'a>(pub &'a str);

impl Hash for Caseless<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(self.0, state);
    }
}

impl Equivalent<CaselessKey> for Caseless<'_> {
    fn equivalent(&self, key: &CaselessKey) -> bool {
        folded_chars(self.0).eq(folded_chars(&key.text))
    }
}

impl Serialize for CaselessKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for CaselessKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(CaselessKey::new)
    }
}
