//! # serde_lax
//!
//! A Serde-compatible lenient JSON ingestion layer: normalize arbitrary JSON
//! into a small canonical value model, then coerce that model into strongly
//! typed destination values.
//!
//! ## Why lenient?
//!
//! Real-world JSON producers are sloppy. Keys arrive in whatever casing the
//! producer felt like, booleans arrive as `"True"`, numbers arrive quoted,
//! and half the optional members are `null` instead of absent. This crate
//! absorbs all of that at the boundary so the rest of your code works with
//! clean, typed values:
//!
//! - **Case-insensitive keys** that preserve their original casing for
//!   display and serialization
//! - **Boolean-string folding**: `"true"`/`"FALSE"` become real booleans
//! - **Null dropping**: null entries disappear from arrays and objects,
//!   because "absent" and "null" mean the same thing downstream
//! - **Numeric inference**: every number takes the smallest exact
//!   representation on the `i32` → `i64` → `f64` ladder
//! - **Type coercion** into ~20 destination families: primitives, enums,
//!   2D geometry, colors, dates, GUIDs, URLs, versions, durations, and IP
//!   addresses
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_lax::{from_str, from_value, Point, Value};
//!
//! let value = from_str(r#"{
//!     "Bounds": {"x": 10, "y": 20},
//!     "Visible": "TRUE",
//!     "Ignored": null
//! }"#).unwrap();
//!
//! let map = value.as_object().unwrap();
//!
//! // Lookups ignore letter case
//! assert_eq!(map.get("visible"), Some(&Value::Bool(true)));
//! assert!(map.get("ignored").is_none());
//!
//! // Coerce a field map into a typed struct
//! let bounds: Point = from_value(map.get("bounds").unwrap()).unwrap();
//! assert_eq!(bounds, Point::new(10, 20));
//! ```
//!
//! ## Whole-Object Binding
//!
//! For populating entire objects, declare a [`PropertySet`] once and let it
//! drive both directions — binds tolerate per-member failures, extracts
//! suppress declared defaults:
//!
//! ```rust
//! use serde_lax::{from_str, PropertySet, Value};
//!
//! #[derive(Default)]
//! struct Window { left: i32, title: String }
//!
//! let set = PropertySet::builder()
//!     .field_with_default("Left", |w: &Window| w.left, |w, v| w.left = v, 0)
//!     .field("Title", |w: &Window| w.title.clone(), |w, v| w.title = v)
//!     .build();
//!
//! let value = from_str(r#"{"LEFT": "120", "title": "main"}"#).unwrap();
//! let mut window = Window::default();
//! set.bind(&mut window, value.as_object().unwrap());
//!
//! assert_eq!(window.left, 120); // quoted number, wrong casing: still bound
//! assert_eq!(window.title, "main");
//! ```
//!
//! ## Dynamic Values with the lax! Macro
//!
//! ```rust
//! use serde_lax::{lax, Value};
//!
//! let data = lax!({
//!     "name": "Alice",
//!     "tags": ["admin", "user"]
//! });
//!
//! assert_eq!(data.as_object().unwrap().get("NAME"), Some(&Value::from("Alice")));
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Hard failures are typed errors, never panics
//! - Soft coercions (`bool`, the `to_*` helpers, color lookup) are total
//!   functions that fall back to safe defaults

pub mod bind;
pub mod coerce;
pub mod color;
pub mod error;
pub mod geometry;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use bind::{Property, PropertySet, PropertySetBuilder};
pub use coerce::{from_value, to_bool, to_float, to_int, value_type_name, FromValue, ToValue};
pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{Point, PointF, Rect, RectF, Size, SizeF};
pub use key::CaselessKey;
pub use map::ValueMap;
pub use options::LaxOptions;
pub use ser::ValueSerializer;
pub use value::Value;

use serde::Serialize;
use std::io;

/// Parses JSON text into a normalized [`Value`] with default options.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{from_str, Value};
///
/// let value = from_str(r#"{"Enabled": "true"}"#).unwrap();
/// assert_eq!(
///     value.as_object().unwrap().get("enabled"),
///     Some(&Value::Bool(true))
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value> {
    serde_json::from_str(s).map_err(Error::from)
}

/// Parses JSON text into a normalized [`Value`] with explicit options.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &LaxOptions) -> Result<Value> {
    let tree: serde_json::Value = serde_json::from_str(s)?;
    Ok(Value::from_json_with_options(&tree, options))
}

/// Parses JSON bytes into a normalized [`Value`].
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Value> {
    serde_json::from_slice(v).map_err(Error::from)
}

/// Parses JSON from an I/O stream into a normalized [`Value`].
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Value> {
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Serializes any `T: Serialize` to compact JSON text.
///
/// Composite types carry their own serializable forms: colors come out as
/// names or `#AARRGGBB` hex, geometry as field maps.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{to_string, Size};
///
/// let text = to_string(&Size::new(800, 600)).unwrap();
/// assert_eq!(text, r#"{"width":800,"height":600}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value).map_err(Error::from)
}

/// Serializes any `T: Serialize` to pretty-printed JSON text.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(value).map_err(Error::from)
}

/// Serializes any `T: Serialize` as JSON text to a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Converts any `T: Serialize` to a normalized [`Value`] without going
/// through JSON text.
///
/// The same inference rules apply as when parsing a document: integers
/// narrow, boolean-strings fold, nulls disappear from containers.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
