//! The value-to-native type coercion engine.
//!
//! This module provides the two traits every destination type family
//! implements:
//!
//! - [`FromValue`]: coerce a normalized [`Value`] into a native type,
//!   tolerating representation mismatches (numbers in strings, booleans in
//!   any spelling, whole floats for integers)
//! - [`ToValue`]: the inverse — convert a native value into its serializable
//!   [`Value`] form
//!
//! plus the total helpers [`to_bool`], [`to_int`], and [`to_float`], which
//! never fail and fall back to `false`/`0` for anything unsupported.
//!
//! ## Coercion rules
//!
//! In priority order: identity passes through unchanged; `Option<T>` unwraps
//! and recurses; null into a non-nullable target is a hard error; string
//! targets take the value's default text rendering; numeric targets convert
//! with half-away-from-zero rounding when narrowing fractions; `bool` is
//! total and never fails; dates, GUIDs, URLs, versions, durations, and IP
//! addresses parse their canonical text formats and fail hard otherwise.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::{from_value, Value};
//!
//! assert_eq!(from_value::<i32>(&Value::Float(42.7)).unwrap(), 43);
//! assert_eq!(from_value::<i32>(&Value::from("19")).unwrap(), 19);
//! assert_eq!(from_value::<bool>(&Value::from(2)).unwrap(), true);
//! assert!(from_value::<i32>(&Value::from("nineteen")).is_err());
//! ```

use crate::{Error, Result, Value, ValueMap};
use chrono::{DateTime, Utc};
use std::net::IpAddr;
use std::time::Duration;

/// Returns a short name for the value's variant, for error messages.
#[must_use]
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Long(_) => "long",
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coercion from a normalized [`Value`] into a native type.
///
/// Implemented for primitives, `Option<T>`, `Vec<T>`, the composite 2D
/// shapes, [`Color`](crate::Color), and the parseable opaque types (dates,
/// GUIDs, URLs, versions, durations, IP addresses). Enums generated with
/// [`text_enum!`](crate::text_enum) implement it by member-name match.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

/// Conversion of a native value into its serializable [`Value`] form.
///
/// The inverse of [`FromValue`] for the sanctioned type set: colors become
/// name or hex strings, geometry becomes field maps, arrays convert
/// elementwise, and everything else passes through as the matching variant.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Coerces a value to `T`. Free-function form of [`FromValue::from_value`].
///
/// # Errors
///
/// Returns an error when the value cannot represent `T`; see the module docs
/// for which failures are hard and which coercions are total.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T: FromValue>(value: &Value) -> Result<T> {
    T::from_value(value)
}

// Identity fast path.
impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

// Total: unrecognized inputs coerce to false, never an error.
impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(match value {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Long(l) => *l != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => s.eq_ignore_ascii_case("true"),
            _ => false,
        })
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Err(Error::null_value("String")),
            other => Ok(other.to_string()),
        }
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::String((*self).to_string())
    }
}

/// Rounds half away from zero and range-checks into i64.
fn float_to_i64(target: &'static str, f: f64) -> Result<i64> {
    if !f.is_finite() {
        return Err(Error::out_of_range(target, f));
    }
    let rounded = f.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return Err(Error::out_of_range(target, f));
    }
    Ok(rounded as i64)
}

/// Integer grammar first, then float-and-round, matching the engine's
/// leniency for numbers that arrive quoted.
fn parse_int_text(target: &'static str, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) => float_to_i64(target, f),
        Err(err) => Err(Error::parse(target, text, err)),
    }
}

fn int_rendering(target: &'static str, value: &Value) -> Result<i64> {
    match value {
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Int(i) => Ok(i64::from(*i)),
        Value::Long(l) => Ok(*l),
        Value::Float(f) => float_to_i64(target, *f),
        Value::String(s) => parse_int_text(target, s),
        Value::Null => Err(Error::null_value(target)),
        other => Err(Error::coerce(target, value_type_name(other))),
    }
}

macro_rules! coerce_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self> {
                let wide = int_rendering($name, value)?;
                <$ty>::try_from(wide).map_err(|_| Error::out_of_range($name, wide))
            }
        }

        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::from(*self)
            }
        }
    )*};
}

coerce_integer! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> Result<Self> {
        let wide = int_rendering("u64", value)?;
        u64::try_from(wide).map_err(|_| Error::out_of_range("u64", wide))
    }
}

impl ToValue for u64 {
    fn to_value(&self) -> Value {
        match i64::try_from(*self) {
            Ok(signed) => Value::Long(signed),
            Err(_) => Value::Float(*self as f64),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(f64::from(u8::from(*b))),
            Value::Int(i) => Ok(f64::from(*i)),
            Value::Long(l) => Ok(*l as f64),
            Value::Float(f) => Ok(*f),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|err| Error::parse("f64", s, err)),
            Value::Null => Err(Error::null_value("f64")),
            other => Err(Error::coerce("f64", value_type_name(other))),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        f64::from_value(value).map(|f| f as f32)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(ch),
                    _ => Err(Error::parse("char", s, "expected exactly one character")),
                }
            }
            Value::Int(_) | Value::Long(_) => {
                let wide = int_rendering("char", value)?;
                u32::try_from(wide)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| Error::out_of_range("char", wide))
            }
            Value::Null => Err(Error::null_value("char")),
            other => Err(Error::coerce("char", value_type_name(other))),
        }
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items.iter().map(T::from_value).collect(),
            Value::Null => Err(Error::null_value("array")),
            other => Err(Error::coerce("array", value_type_name(other))),
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl FromValue for ValueMap {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.clone()),
            Value::Null => Err(Error::null_value("object")),
            other => Err(Error::coerce("object", value_type_name(other))),
        }
    }
}

impl ToValue for ValueMap {
    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }
}

/// Shared front half of the opaque parseable types: null is a hard error,
/// everything else coerces through its text rendering.
fn string_rendering(target: &'static str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Err(Error::null_value(target)),
        Value::String(s) => Ok(s.clone()),
        other => Ok(other.to_string()),
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self> {
        let text = string_rendering("DateTime", value)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|err| Error::parse("DateTime", &text, err))
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::String(self.to_rfc3339())
    }
}

impl FromValue for uuid::Uuid {
    fn from_value(value: &Value) -> Result<Self> {
        let text = string_rendering("Uuid", value)?;
        uuid::Uuid::parse_str(&text).map_err(|err| Error::parse("Uuid", &text, err))
    }
}

impl ToValue for uuid::Uuid {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl FromValue for url::Url {
    fn from_value(value: &Value) -> Result<Self> {
        let text = string_rendering("Url", value)?;
        url::Url::parse(&text).map_err(|err| Error::parse("Url", &text, err))
    }
}

impl ToValue for url::Url {
    fn to_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

impl FromValue for semver::Version {
    fn from_value(value: &Value) -> Result<Self> {
        let text = string_rendering("Version", value)?;
        semver::Version::parse(&text).map_err(|err| Error::parse("Version", &text, err))
    }
}

impl ToValue for semver::Version {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl FromValue for Duration {
    fn from_value(value: &Value) -> Result<Self> {
        let text = string_rendering("Duration", value)?;
        humantime::parse_duration(&text).map_err(|err| Error::parse("Duration", &text, err))
    }
}

impl ToValue for Duration {
    fn to_value(&self) -> Value {
        Value::String(humantime::format_duration(*self).to_string())
    }
}

impl FromValue for IpAddr {
    fn from_value(value: &Value) -> Result<Self> {
        let text = string_rendering("IpAddr", value)?;
        text.parse::<IpAddr>()
            .map_err(|err| Error::parse("IpAddr", &text, err))
    }
}

impl ToValue for IpAddr {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

/// Converts to `bool`, never failing.
///
/// Accepts booleans, the numeric variants (nonzero is true), and
/// boolean-strings in any case; everything else is `false`.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{to_bool, Value};
///
/// assert!(to_bool(&Value::from("True")));
/// assert!(to_bool(&Value::from(-1)));
/// assert!(!to_bool(&Value::from("yes")));
/// assert!(!to_bool(&Value::Null));
/// ```
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Long(l) => *l != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Converts to `i32`, never failing.
///
/// Accepts booleans and the numeric variants (floats round half away from
/// zero); anything else — including strings — is `0`.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{to_int, Value};
///
/// assert_eq!(to_int(&Value::Float(2.5)), 3);
/// assert_eq!(to_int(&Value::from("42")), 0);
/// ```
#[must_use]
pub fn to_int(value: &Value) -> i32 {
    match value {
        Value::Bool(b) => i32::from(*b),
        Value::Int(i) => *i,
        Value::Long(l) => i32::try_from(*l).unwrap_or(0),
        Value::Float(f) => {
            let rounded = f.round();
            if rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX) {
                rounded as i32
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Converts to `f64`, never failing.
///
/// Accepts booleans and the numeric variants; anything else is `0.0`.
#[must_use]
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Int(i) => f64::from(*i),
        Value::Long(l) => *l as f64,
        Value::Float(f) => *f,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fast_path() {
        let value = Value::from(42);
        assert_eq!(from_value::<Value>(&value).unwrap(), value);
        assert_eq!(from_value::<i32>(&value).unwrap(), 42);
    }

    #[test]
    fn test_nullable_unwrap() {
        assert_eq!(from_value::<Option<i32>>(&Value::Null).unwrap(), None);
        assert_eq!(
            from_value::<Option<i32>>(&Value::from(5)).unwrap(),
            Some(5)
        );
        assert!(from_value::<i32>(&Value::Null).is_err());
    }

    #[test]
    fn test_fractional_narrowing_rounds_half_away_from_zero() {
        assert_eq!(from_value::<i32>(&Value::Float(42.7)).unwrap(), 43);
        assert_eq!(from_value::<i32>(&Value::Float(42.5)).unwrap(), 43);
        assert_eq!(from_value::<i32>(&Value::Float(42.4)).unwrap(), 42);
        assert_eq!(from_value::<i32>(&Value::Float(-42.5)).unwrap(), -43);
    }

    #[test]
    fn test_numeric_strings_parse() {
        assert_eq!(from_value::<i32>(&Value::from("19")).unwrap(), 19);
        assert_eq!(from_value::<i32>(&Value::from(" 42.7 ")).unwrap(), 43);
        assert_eq!(from_value::<f64>(&Value::from("2.5")).unwrap(), 2.5);
        assert!(from_value::<i32>(&Value::from("nineteen")).is_err());
    }

    #[test]
    fn test_integer_range_checks() {
        assert_eq!(from_value::<u8>(&Value::from(255)).unwrap(), 255);
        assert!(from_value::<u8>(&Value::from(256)).is_err());
        assert!(from_value::<u8>(&Value::from(-1)).is_err());
        assert!(from_value::<i32>(&Value::Long(i64::MAX)).is_err());
    }

    #[test]
    fn test_bool_is_total() {
        assert!(from_value::<bool>(&Value::Bool(true)).unwrap());
        assert!(from_value::<bool>(&Value::from("TRUE")).unwrap());
        assert!(!from_value::<bool>(&Value::from("False")).unwrap());
        assert!(from_value::<bool>(&Value::from(7)).unwrap());
        assert!(!from_value::<bool>(&Value::from(0)).unwrap());
        // Unrecognized inputs are false, never an error.
        assert!(!from_value::<bool>(&Value::from("maybe")).unwrap());
        assert!(!from_value::<bool>(&Value::Null).unwrap());
        assert!(!from_value::<bool>(&Value::Array(vec![])).unwrap());
    }

    #[test]
    fn test_string_rendering() {
        assert_eq!(from_value::<String>(&Value::from(42)).unwrap(), "42");
        assert_eq!(from_value::<String>(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(from_value::<String>(&Value::from("x")).unwrap(), "x");
        assert!(from_value::<String>(&Value::Null).is_err());
    }

    #[test]
    fn test_char() {
        assert_eq!(from_value::<char>(&Value::from("x")).unwrap(), 'x');
        assert_eq!(from_value::<char>(&Value::from(65)).unwrap(), 'A');
        assert!(from_value::<char>(&Value::from("xy")).is_err());
        assert!(from_value::<char>(&Value::from("")).is_err());
    }

    #[test]
    fn test_datetime_parses_rfc3339() {
        let value = Value::from("2024-05-01T12:30:00Z");
        let dt = from_value::<DateTime<Utc>>(&value).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-01T12:30:00+00:00");
        assert!(from_value::<DateTime<Utc>>(&Value::from("yesterday")).is_err());
    }

    #[test]
    fn test_uuid_url_version_ip() {
        let id = from_value::<uuid::Uuid>(&Value::from(
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
        ))
        .unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!(from_value::<uuid::Uuid>(&Value::from("not-a-guid")).is_err());

        let url = from_value::<url::Url>(&Value::from("https://example.com/a")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a");
        assert!(from_value::<url::Url>(&Value::from("::nope::")).is_err());

        let version = from_value::<semver::Version>(&Value::from("1.2.3")).unwrap();
        assert_eq!(version, semver::Version::new(1, 2, 3));

        let ip = from_value::<IpAddr>(&Value::from("127.0.0.1")).unwrap();
        assert_eq!(ip.to_string(), "127.0.0.1");
        assert!(from_value::<IpAddr>(&Value::from("localhost")).is_err());
    }

    #[test]
    fn test_duration_round_trip() {
        let value = Value::from("2m 30s");
        let duration = from_value::<Duration>(&value).unwrap();
        assert_eq!(duration, Duration::from_secs(150));
        assert_eq!(duration.to_value(), Value::from("2m 30s"));
    }

    #[test]
    fn test_vec_elementwise() {
        let value = Value::Array(vec![Value::from(1), Value::from("2"), Value::Float(3.0)]);
        assert_eq!(from_value::<Vec<i32>>(&value).unwrap(), vec![1, 2, 3]);
        let bad = Value::Array(vec![Value::from(1), Value::from("x")]);
        assert!(from_value::<Vec<i32>>(&bad).is_err());
    }

    #[test]
    fn test_total_helpers() {
        assert!(to_bool(&Value::from("true")));
        assert!(!to_bool(&Value::from("1 but string")));
        assert_eq!(to_int(&Value::Float(3.14)), 3);
        assert_eq!(to_int(&Value::from("42")), 0);
        assert_eq!(to_int(&Value::Bool(true)), 1);
        assert_eq!(to_float(&Value::from(2)), 2.0);
        assert_eq!(to_float(&Value::from("2.5")), 0.0);
        assert_eq!(to_int(&Value::Null), 0);
    }
}
