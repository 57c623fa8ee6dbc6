//! The canonical value model and JSON normalization.
//!
//! This module provides the [`Value`] enum, a closed representation of
//! normalized JSON data, and the normalization rules that turn a parsed
//! [`serde_json::Value`] tree into it:
//!
//! - numbers take the first exact representation on the `i32` → `i64` →
//!   `f64` ladder
//! - strings equal to `"true"`/`"false"` (any case) fold into booleans
//! - null entries disappear from arrays and objects
//! - object keys become case-insensitive, case-preserving [`CaselessKey`]s
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::Value;
//!
//! let node = serde_json::json!({
//!     "Enabled": "TRUE",
//!     "Count": 3,
//!     "Ignored": null
//! });
//!
//! let value = Value::from_json(&node);
//! let map = value.as_object().unwrap();
//! assert_eq!(map.get("enabled").and_then(|v| v.as_bool()), Some(true));
//! assert_eq!(map.get("count").and_then(|v| v.as_i64()), Some(3));
//! assert!(map.get("ignored").is_none()); // nulls are dropped, not kept
//! ```

use crate::key::CaselessKey;
use crate::{LaxOptions, ValueMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A normalized, dynamically-typed JSON value.
///
/// `Value` is a closed variant type: every normalized document is built from
/// exactly these eight shapes. Integers carry the smallest of `i32`/`i64`
/// that represents them exactly; all other numbers are `f64`.
///
/// # Examples
///
/// ```rust
/// use serde_lax::Value;
///
/// let small = Value::from_json(&serde_json::json!(7));
/// let large = Value::from_json(&serde_json::json!(5_000_000_000i64));
/// let frac = Value::from_json(&serde_json::json!(2.5));
///
/// assert!(matches!(small, Value::Int(7)));
/// assert!(matches!(large, Value::Long(5_000_000_000)));
/// assert!(matches!(frac, Value::Float(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(ValueMap),
}

impl Value {
    /// Normalizes a parsed JSON tree with the default [`LaxOptions`].
    #[must_use]
    pub fn from_json(node: &serde_json::Value) -> Value {
        Self::from_json_with_options(node, &LaxOptions::default())
    }

    /// Normalizes a parsed JSON tree with explicit options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lax::{LaxOptions, Value};
    ///
    /// let node = serde_json::json!([1, null, "x"]);
    ///
    /// let dropped = Value::from_json(&node);
    /// assert_eq!(dropped.as_array().map(Vec::len), Some(2));
    ///
    /// let kept = Value::from_json_with_options(
    ///     &node,
    ///     &LaxOptions::new().with_keep_nulls(true),
    /// );
    /// assert_eq!(kept.as_array().map(Vec::len), Some(3));
    /// ```
    #[must_use]
    pub fn from_json_with_options(node: &serde_json::Value, options: &LaxOptions) -> Value {
        match node {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Self::from_number(n),
            serde_json::Value::String(s) => Self::from_text(s, options),
            serde_json::Value::Array(items) => {
                let mut array = Vec::with_capacity(items.len());
                for item in items {
                    let value = Self::from_json_with_options(item, options);
                    if options.keep_nulls || !value.is_null() {
                        array.push(value);
                    }
                }
                Value::Array(array)
            }
            serde_json::Value::Object(members) => {
                let mut map = ValueMap::with_capacity(members.len());
                for (name, member) in members {
                    let value = Self::from_json_with_options(member, options);
                    if options.keep_nulls || !value.is_null() {
                        map.insert(name.as_str(), value);
                    }
                }
                Value::Object(map)
            }
        }
    }

    /// First exact representation on the ladder wins: i32, then i64, then f64.
    fn from_number(n: &serde_json::Number) -> Value {
        if let Some(i) = n.as_i64() {
            match i32::try_from(i) {
                Ok(small) => Value::Int(small),
                Err(_) => Value::Long(i),
            }
        } else if let Some(u) = n.as_u64() {
            // Beyond i64::MAX; the float is the closest we can represent.
            Value::Float(u as f64)
        } else {
            match n.as_f64() {
                Some(f) => Value::Float(f),
                None => Value::Null,
            }
        }
    }

    fn from_text(s: &str, options: &LaxOptions) -> Value {
        if options.fold_bool_strings {
            if s.eq_ignore_ascii_case("true") {
                return Value::Bool(true);
            }
            if s.eq_ignore_ascii_case("false") {
                return Value::Bool(false);
            }
        }
        Value::String(s.to_string())
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is any numeric variant.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Long(_) | Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it as
    /// `i64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lax::Value;
    ///
    /// assert_eq!(Value::Int(42).as_i64(), Some(42));
    /// assert_eq!(Value::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Value::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i64::from(*i)),
            Value::Long(l) => Some(*l),
            Value::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// If the value is numeric, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(f64::from(*i)),
            Value::Long(l) => Some(*l as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// The default text rendering: what coercion to a string target produces.
///
/// Strings render verbatim (no quoting); containers render JSON-ish for
/// diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Long(l) => write!(f, "{}", l),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => f.write_str(s),
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => write!(f, "{}", obj),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Long(i64::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i32(*i),
            Value::Long(l) => serializer.serialize_i64(*l),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

// Reading one value from a token stream IS normalization: the visitor applies
// the same inference rules as `from_json` with default options.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(match i32::try_from(value) {
                    Ok(small) => Value::Int(small),
                    Err(_) => Value::Long(value),
                })
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(match i64::try_from(value) {
                    Ok(signed) => match i32::try_from(signed) {
                        Ok(small) => Value::Int(small),
                        Err(_) => Value::Long(signed),
                    },
                    Err(_) => Value::Float(value as f64),
                })
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::from_text(value, &LaxOptions::default()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                if value.eq_ignore_ascii_case("true") {
                    Ok(Value::Bool(true))
                } else if value.eq_ignore_ascii_case("false") {
                    Ok(Value::Bool(false))
                } else {
                    Ok(Value::String(value))
                }
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element::<Value>()? {
                    if !elem.is_null() {
                        vec.push(elem);
                    }
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = ValueMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    if !value.is_null() {
                        map.insert(CaselessKey::new(key), value);
                    }
                }
                Ok(Value::Object(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(json: serde_json::Value) -> Value {
        Value::from_json(&json)
    }

    #[test]
    fn test_numeric_ladder() {
        assert_eq!(normalize(serde_json::json!(0)), Value::Int(0));
        assert_eq!(
            normalize(serde_json::json!(i32::MAX)),
            Value::Int(i32::MAX)
        );
        assert_eq!(
            normalize(serde_json::json!(i64::from(i32::MAX) + 1)),
            Value::Long(i64::from(i32::MAX) + 1)
        );
        assert_eq!(
            normalize(serde_json::json!(i32::MIN)),
            Value::Int(i32::MIN)
        );
        assert_eq!(normalize(serde_json::json!(2.5)), Value::Float(2.5));
        // Beyond i64 range falls through to float
        assert!(matches!(
            normalize(serde_json::json!(u64::MAX)),
            Value::Float(_)
        ));
    }

    #[test]
    fn test_bool_string_folding() {
        assert_eq!(normalize(serde_json::json!("true")), Value::Bool(true));
        assert_eq!(normalize(serde_json::json!("True")), Value::Bool(true));
        assert_eq!(normalize(serde_json::json!("TRUE")), Value::Bool(true));
        assert_eq!(normalize(serde_json::json!("false")), Value::Bool(false));
        assert_eq!(normalize(serde_json::json!("FaLsE")), Value::Bool(false));
        assert_eq!(
            normalize(serde_json::json!("truee")),
            Value::String("truee".to_string())
        );
    }

    #[test]
    fn test_fold_disabled() {
        let options = LaxOptions::new().with_fold_bool_strings(false);
        let value = Value::from_json_with_options(&serde_json::json!("true"), &options);
        assert_eq!(value, Value::String("true".to_string()));
    }

    #[test]
    fn test_array_drops_nulls() {
        let value = normalize(serde_json::json!([1, null, "x"]));
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0], Value::Int(1));
        assert_eq!(arr[1], Value::String("x".to_string()));
    }

    #[test]
    fn test_object_drops_nulls() {
        let value = normalize(serde_json::json!({"a": 1, "b": null}));
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("a"), Some(&Value::Int(1)));
        assert!(obj.get("b").is_none());
    }

    #[test]
    fn test_string_case_preserved() {
        let value = normalize(serde_json::json!("Hello World"));
        assert_eq!(value.as_str(), Some("Hello World"));
    }

    #[test]
    fn test_deserialize_matches_from_json() {
        let text = r#"{"Enabled": "TRUE", "Count": 3, "Skip": null, "Items": [null, 1]}"#;
        let parsed: Value = serde_json::from_str(text).unwrap();
        let tree: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, Value::from_json(&tree));
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        // Strings render verbatim: this is what coercion-to-string produces.
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(
            Value::Array(vec![Value::Int(1), Value::Int(2)]).to_string(),
            "[1,2]"
        );
    }

    #[test]
    fn test_as_i64_whole_floats() {
        assert_eq!(Value::Float(42.0).as_i64(), Some(42));
        assert_eq!(Value::Float(42.5).as_i64(), None);
        assert_eq!(Value::Long(7).as_i64(), Some(7));
        assert_eq!(Value::from("42").as_i64(), None);
    }
}
