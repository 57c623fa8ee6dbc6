//! Error types for normalization, coercion, and binding.
//!
//! This module provides the crate-wide [`Error`] enum with enough context to
//! diagnose why a value refused to become the type you asked for.
//!
//! ## Error Categories
//!
//! - **Parse errors**: a string rendering did not match a type's canonical
//!   text format (dates, GUIDs, URLs, versions, durations, IP addresses)
//! - **Coercion errors**: a value's shape is incompatible with the target
//!   (e.g. an array where a point was expected)
//! - **Missing fields**: a composite shape was given a non-empty map lacking
//!   a required field
//! - **I/O and JSON errors**: reading input or propagated parser failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::{from_value, Value, Error};
//!
//! let result: Result<i32, Error> = from_value(&Value::from("not a number"));
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by normalization, coercion, and
/// property binding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Error propagated from the underlying JSON parser or writer
    #[error("JSON error: {0}")]
    Json(String),

    /// A null value was coerced into a non-nullable target
    #[error("cannot coerce null to {target}")]
    NullValue { target: &'static str },

    /// The value's shape is incompatible with the target type
    #[error("cannot coerce {found} to {target}")]
    Coerce {
        target: &'static str,
        found: &'static str,
    },

    /// A composite shape was given a non-empty map missing a required field
    #[error("missing field `{field}` for {shape}")]
    MissingField {
        shape: &'static str,
        field: &'static str,
    },

    /// A string rendering did not match the target's canonical text format
    #[error("cannot parse {input:?} as {target}: {msg}")]
    Parse {
        target: &'static str,
        input: String,
        msg: String,
    },

    /// A string did not name any member of the target enum
    #[error("unknown variant `{name}` for {enum_name}")]
    UnknownVariant {
        enum_name: &'static str,
        name: String,
    },

    /// A numeric value does not fit the target's range
    #[error("value {value} out of range for {target}")]
    OutOfRange {
        target: &'static str,
        value: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a null-coercion error naming the non-nullable target.
    pub fn null_value(target: &'static str) -> Self {
        Error::NullValue { target }
    }

    /// Creates a shape-mismatch error naming the target and what was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lax::Error;
    ///
    /// let err = Error::coerce("Point", "array");
    /// assert!(err.to_string().contains("cannot coerce array to Point"));
    /// ```
    pub fn coerce(target: &'static str, found: &'static str) -> Self {
        Error::Coerce { target, found }
    }

    /// Creates a missing-field error for a composite shape.
    pub fn missing_field(shape: &'static str, field: &'static str) -> Self {
        Error::MissingField { shape, field }
    }

    /// Creates a parse error for a string that did not match the target's
    /// canonical text format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lax::Error;
    ///
    /// let err = Error::parse("Uuid", "not-a-guid", "invalid length");
    /// assert!(err.to_string().contains("not-a-guid"));
    /// ```
    pub fn parse(target: &'static str, input: &str, msg: impl fmt::Display) -> Self {
        Error::Parse {
            target,
            input: input.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unknown-variant error for enum coercion.
    pub fn unknown_variant(enum_name: &'static str, name: &str) -> Self {
        Error::UnknownVariant {
            enum_name,
            name: name.to_string(),
        }
    }

    /// Creates an out-of-range error for a numeric narrowing that overflowed.
    pub fn out_of_range(target: &'static str, value: impl fmt::Display) -> Self {
        Error::OutOfRange {
            target,
            value: value.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lax::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
