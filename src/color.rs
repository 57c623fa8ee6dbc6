//! ARGB color with named and hex text forms.
//!
//! Colors ingest from either a recognized color name or a `#`-prefixed hex
//! string (`#RRGGBB` or `#AARRGGBB`, alpha first, case-insensitive) and
//! serialize back to the name when one matches, otherwise to uppercase
//! eight-digit `#AARRGGBB`.
//!
//! The name table is a fixed lookup; anything it does not know and that is
//! not valid hex is simply *not a color* — [`Color::from_value`] returns
//! `None` rather than an error.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::{Color, Value};
//!
//! assert_eq!(Color::from_value(&Value::from("red")), Some(Color::rgb(255, 0, 0)));
//! assert_eq!(
//!     Color::from_value(&Value::from("#80FF0000")),
//!     Some(Color::argb(128, 255, 0, 0))
//! );
//! assert_eq!(Color::from_value(&Value::from("not-a-color")), None);
//!
//! assert_eq!(Color::argb(128, 255, 0, 0).to_hex_string(), "#80FF0000");
//! ```

use crate::coerce::{FromValue, ToValue};
use crate::{Error, Result, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 32-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fixed name table; order matters for reverse lookup when two names share
/// an ARGB value (the first entry wins).
static NAMED_COLORS: &[(&str, Color)] = &[
    ("transparent", Color::argb(0, 255, 255, 255)),
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("aqua", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("fuchsia", Color::rgb(255, 0, 255)),
    ("green", Color::rgb(0, 128, 0)),
    ("silver", Color::rgb(192, 192, 192)),
    ("gray", Color::rgb(128, 128, 128)),
    ("maroon", Color::rgb(128, 0, 0)),
    ("olive", Color::rgb(128, 128, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("teal", Color::rgb(0, 128, 128)),
    ("navy", Color::rgb(0, 0, 128)),
    ("orange", Color::rgb(255, 165, 0)),
    ("brown", Color::rgb(165, 42, 42)),
    ("pink", Color::rgb(255, 192, 203)),
    ("gold", Color::rgb(255, 215, 0)),
    ("indigo", Color::rgb(75, 0, 130)),
    ("violet", Color::rgb(238, 130, 238)),
    ("coral", Color::rgb(255, 127, 80)),
    ("salmon", Color::rgb(250, 128, 114)),
    ("khaki", Color::rgb(240, 230, 140)),
    ("plum", Color::rgb(221, 160, 221)),
    ("turquoise", Color::rgb(64, 224, 208)),
    ("crimson", Color::rgb(220, 20, 60)),
    ("chocolate", Color::rgb(210, 105, 30)),
    ("lavender", Color::rgb(230, 230, 250)),
    ("beige", Color::rgb(245, 245, 220)),
    ("ivory", Color::rgb(255, 255, 240)),
    ("azure", Color::rgb(240, 255, 255)),
];

impl Color {
    /// Creates a color from alpha, red, green, and blue channels.
    #[must_use]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// Creates an opaque color from red, green, and blue channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { a: 255, r, g, b }
    }

    /// Looks up a color by name, ignoring letter case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Color> {
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// Returns the recognized name for this exact ARGB value, if any.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, candidate)| candidate == self)
            .map(|(name, _)| *name)
    }

    /// Parses a `#RRGGBB` or `#AARRGGBB` hex string, case-insensitive,
    /// alpha first. Returns `None` for anything else.
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Color> {
        let digits = text.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).ok();
        match digits.len() {
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::argb(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    /// The soft lookup: named color first, then hex, `None` otherwise.
    ///
    /// Total — never an error. Non-string values are not colors.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Color> {
        let text = value.as_str()?;
        if let Some(color) = Color::from_name(text) {
            return Some(color);
        }
        if text.starts_with('#') {
            return Color::parse_hex(text);
        }
        None
    }

    /// Formats as uppercase `#AARRGGBB`, alpha first, always eight digits.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

/// Renders the recognized name when there is one, else the hex form.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str(&self.to_hex_string()),
        }
    }
}

impl FromValue for Color {
    fn from_value(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Err(Error::null_value("Color"));
        }
        Color::from_value(value)
            .ok_or_else(|| Error::parse("Color", &value.to_string(), "unrecognized name or hex"))
    }
}

impl ToValue for Color {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Color::default());
        }
        FromValue::from_value(&value).map_err(serde::de::Error::custom)
    }
}
