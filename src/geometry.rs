//! Composite 2D geometry types.
//!
//! Six fixed shapes — point, size, and rectangle, each in integer and float
//! widths — that coerce from field maps and serialize back to them.
//!
//! Coercion from a map is all-or-nothing: every documented field (`x`,`y`
//! for points, `width`,`height` for sizes, all four for rectangles) must be
//! present or the coercion fails — with one sanctioned exception: an
//! **empty** map coerces to the shape's zero value, so optional geometry can
//! default cleanly. Partial maps are always an error, never zero-filled.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::{from_value, Point, Value};
//!
//! let full = Value::from_json(&serde_json::json!({"x": 10, "y": 20}));
//! assert_eq!(from_value::<Point>(&full).unwrap(), Point::new(10, 20));
//!
//! let empty = Value::from_json(&serde_json::json!({}));
//! assert_eq!(from_value::<Point>(&empty).unwrap(), Point::ZERO);
//!
//! let partial = Value::from_json(&serde_json::json!({"x": 10}));
//! assert!(from_value::<Point>(&partial).is_err());
//! ```

use crate::coerce::{value_type_name, FromValue, ToValue};
use crate::{Error, Result, Value, ValueMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! shape_2d {
    (
        $(#[$meta:meta])*
        $name:ident($scalar:ty) { $($field:ident),+ }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Default)]
        pub struct $name {
            $(pub $field: $scalar,)+
        }

        impl $name {
            /// The shape's zero value.
            pub const ZERO: $name = $name { $($field: 0 as $scalar,)+ };

            /// Creates the shape from its field values.
            #[must_use]
            pub const fn new($($field: $scalar),+) -> Self {
                $name { $($field),+ }
            }
        }

        impl FromValue for $name {
            fn from_value(value: &Value) -> Result<Self> {
                match value {
                    // Sanctioned exception: the empty map is the zero value.
                    Value::Object(map) if map.is_empty() => Ok(Self::ZERO),
                    Value::Object(map) => Ok($name {
                        $($field: match map.get(stringify!($field)) {
                            Some(field_value) => FromValue::from_value(field_value)?,
                            None => {
                                return Err(Error::missing_field(
                                    stringify!($name),
                                    stringify!($field),
                                ))
                            }
                        },)+
                    }),
                    Value::Null => Err(Error::null_value(stringify!($name))),
                    other => Err(Error::coerce(stringify!($name), value_type_name(other))),
                }
            }
        }

        impl ToValue for $name {
            fn to_value(&self) -> Value {
                let mut map = ValueMap::new();
                $(map.insert(stringify!($field), self.$field.to_value());)+
                Value::Object(map)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.to_value().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = Value::deserialize(deserializer)?;
                if value.is_null() {
                    return Ok(Self::default());
                }
                Self::from_value(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

shape_2d! {
    /// A 2D point with integer coordinates.
    Point(i32) { x, y }
}

shape_2d! {
    /// A 2D point with float coordinates.
    PointF(f32) { x, y }
}

shape_2d! {
    /// A 2D extent with integer dimensions.
    Size(i32) { width, height }
}

shape_2d! {
    /// A 2D extent with float dimensions.
    SizeF(f32) { width, height }
}

shape_2d! {
    /// An axis-aligned rectangle with integer origin and extent.
    Rect(i32) { x, y, width, height }
}

shape_2d! {
    /// An axis-aligned rectangle with float origin and extent.
    RectF(f32) { x, y, width, height }
}

impl Rect {
    /// Builds a rectangle from an origin point and an extent.
    #[must_use]
    pub const fn from_point_size(origin: Point, extent: Size) -> Self {
        Rect::new(origin.x, origin.y, extent.width, extent.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_value;

    fn object(json: serde_json::Value) -> Value {
        Value::from_json(&json)
    }

    #[test]
    fn test_full_map_coerces() {
        let point = from_value::<Point>(&object(serde_json::json!({"x": 10, "y": 20}))).unwrap();
        assert_eq!(point, Point::new(10, 20));

        let size =
            from_value::<Size>(&object(serde_json::json!({"width": 800, "height": 600}))).unwrap();
        assert_eq!(size, Size::new(800, 600));

        let rect = from_value::<Rect>(&object(
            serde_json::json!({"x": 1, "y": 2, "width": 3, "height": 4}),
        ))
        .unwrap();
        assert_eq!(rect, Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_empty_map_is_zero() {
        // The asymmetry is intentional: empty means "default geometry",
        // while a partial map is a caller mistake.
        assert_eq!(
            from_value::<Point>(&object(serde_json::json!({}))).unwrap(),
            Point::ZERO
        );
        assert_eq!(
            from_value::<RectF>(&object(serde_json::json!({}))).unwrap(),
            RectF::ZERO
        );
    }

    #[test]
    fn test_partial_map_fails() {
        assert!(from_value::<Point>(&object(serde_json::json!({"x": 10}))).is_err());
        assert!(from_value::<Size>(&object(serde_json::json!({"width": 1}))).is_err());
        assert!(from_value::<Rect>(&object(
            serde_json::json!({"x": 1, "y": 2, "width": 3})
        ))
        .is_err());
    }

    #[test]
    fn test_field_names_match_any_case() {
        // The map's keys are caseless, so producers that capitalize still bind.
        let point = from_value::<Point>(&object(serde_json::json!({"X": 10, "Y": 20}))).unwrap();
        assert_eq!(point, Point::new(10, 20));
    }

    #[test]
    fn test_non_map_fails() {
        assert!(from_value::<Point>(&Value::from(5)).is_err());
        assert!(from_value::<Point>(&Value::Array(vec![])).is_err());
        assert!(from_value::<Point>(&Value::Null).is_err());
    }

    #[test]
    fn test_float_shapes() {
        let point =
            from_value::<PointF>(&object(serde_json::json!({"x": 1.5, "y": -2.5}))).unwrap();
        assert_eq!(point, PointF::new(1.5, -2.5));
    }

    #[test]
    fn test_to_value_field_map() {
        let value = Size::new(800, 600).to_value();
        let map = value.as_object().unwrap();
        assert_eq!(map.get("width"), Some(&Value::Int(800)));
        assert_eq!(map.get("height"), Some(&Value::Int(600)));
    }

    #[test]
    fn test_serde_round_trip() {
        let rect = Rect::new(1, 2, 3, 4);
        let text = serde_json::to_string(&rect).unwrap();
        assert_eq!(text, r#"{"x":1,"y":2,"width":3,"height":4}"#);
        let back: Rect = serde_json::from_str(&text).unwrap();
        assert_eq!(rect, back);
    }

    #[test]
    fn test_null_token_is_default() {
        let point: Point = serde_json::from_str("null").unwrap();
        assert_eq!(point, Point::default());
    }

    #[test]
    fn test_from_point_size() {
        let rect = Rect::from_point_size(Point::new(1, 2), Size::new(3, 4));
        assert_eq!(rect, Rect::new(1, 2, 3, 4));
    }
}
