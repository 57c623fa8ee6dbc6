//! Registry-driven property binding.
//!
//! Instead of runtime reflection, each bindable type declares its members
//! once in a [`PropertySet`]: a list of named accessors with optional
//! default values, built through [`PropertySet::builder`]. The set then
//! drives both directions:
//!
//! - [`bind`](PropertySet::bind) populates an object from a [`ValueMap`],
//!   matching names case-insensitively and coercing each entry to the
//!   member's type; a member that refuses its value is skipped silently and
//!   the remaining members still bind
//! - [`extract`](PropertySet::extract) reads the members back out, omitting
//!   nulls and values equal to their declared default, and recording a
//!   diagnostic string for any accessor that fails
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::{PropertySet, Value, ValueMap};
//!
//! #[derive(Default)]
//! struct Window {
//!     left: i32,
//!     title: String,
//! }
//!
//! let set = PropertySet::builder()
//!     .field("Left", |w: &Window| w.left, |w, v| w.left = v)
//!     .field("Title", |w: &Window| w.title.clone(), |w, v| w.title = v)
//!     .build();
//!
//! let mut properties = ValueMap::new();
//! properties.insert("left", Value::from(100));      // any casing binds
//! properties.insert("TITLE", Value::from("hello"));
//!
//! let mut window = Window::default();
//! set.bind(&mut window, &properties);
//! assert_eq!(window.left, 100);
//! assert_eq!(window.title, "hello");
//! ```

use crate::coerce::{FromValue, ToValue};
use crate::{Result, Value, ValueMap};

type ReadFn<T> = Box<dyn Fn(&T) -> Result<Value> + Send + Sync>;
type WriteFn<T> = Box<dyn Fn(&mut T, &Value) -> Result<()> + Send + Sync>;

/// One bindable member: a name, a pair of accessors, and an optional
/// declared default used for suppression on extract.
pub struct Property<T> {
    name: &'static str,
    read: ReadFn<T>,
    write: WriteFn<T>,
    default: Option<Value>,
}

impl<T> Property<T> {
    /// The member name, in the casing it serializes under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared default value, if any.
    #[must_use]
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// The compile-time member registry for a bindable type.
///
/// Built once via [`PropertySet::builder`] and only read afterwards, so a
/// single set can serve concurrent binds of independent targets.
pub struct PropertySet<T> {
    properties: Vec<Property<T>>,
}

impl<T> PropertySet<T> {
    /// Starts building a property set.
    #[must_use]
    pub fn builder() -> PropertySetBuilder<T> {
        PropertySetBuilder {
            properties: Vec::new(),
        }
    }

    /// Returns the number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no members are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns an iterator over the registered properties.
    pub fn iter(&self) -> std::slice::Iter<'_, Property<T>> {
        self.properties.iter()
    }

    /// Populates `target` from `properties`.
    ///
    /// Each registered member looks up a same-named entry, ignoring letter
    /// case; present entries coerce to the member's type and assign. A
    /// failed coercion skips that member and continues — partial success is
    /// the contract. Members without an entry keep their current value.
    pub fn bind(&self, target: &mut T, properties: &ValueMap) {
        for property in &self.properties {
            if let Some(value) = properties.get(property.name) {
                let _ = (property.write)(target, value);
            }
        }
    }

    /// Reads the registered members of `source` into a [`ValueMap`].
    ///
    /// Null values are omitted; values equal to their declared default are
    /// omitted; a failing read records a diagnostic string under the
    /// member's name instead of aborting the extraction.
    #[must_use]
    pub fn extract(&self, source: &T) -> ValueMap {
        let mut map = ValueMap::with_capacity(self.properties.len());
        for property in &self.properties {
            match (property.read)(source) {
                Err(err) => {
                    map.insert(property.name, Value::String(format!("error: {}", err)));
                }
                Ok(Value::Null) => {}
                Ok(value) => {
                    if property.default.as_ref() == Some(&value) {
                        continue;
                    }
                    map.insert(property.name, value);
                }
            }
        }
        map
    }
}

/// Builder for [`PropertySet`].
pub struct PropertySetBuilder<T> {
    properties: Vec<Property<T>>,
}

impl<T: 'static> PropertySetBuilder<T> {
    /// Registers a member with plain accessors.
    ///
    /// The member's type drives coercion on bind and serializable-form
    /// conversion on extract.
    #[must_use]
    pub fn field<V>(self, name: &'static str, get: fn(&T) -> V, set: fn(&mut T, V)) -> Self
    where
        V: FromValue + ToValue + 'static,
    {
        self.push(name, get, set, None)
    }

    /// Registers a member with a declared default value.
    ///
    /// On extract, a current value equal to the default is omitted.
    #[must_use]
    pub fn field_with_default<V>(
        self,
        name: &'static str,
        get: fn(&T) -> V,
        set: fn(&mut T, V),
        default: V,
    ) -> Self
    where
        V: FromValue + ToValue + 'static,
    {
        let default = default.to_value();
        self.push(name, get, set, Some(default))
    }

    /// Registers a member with fallible accessors operating directly on
    /// [`Value`]s. Read errors surface as diagnostics on extract; write
    /// errors are skipped on bind like any other member failure.
    #[must_use]
    pub fn computed(
        mut self,
        name: &'static str,
        read: impl Fn(&T) -> Result<Value> + Send + Sync + 'static,
        write: impl Fn(&mut T, &Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.properties.push(Property {
            name,
            read: Box::new(read),
            write: Box::new(write),
            default: None,
        });
        self
    }

    fn push<V>(
        mut self,
        name: &'static str,
        get: fn(&T) -> V,
        set: fn(&mut T, V),
        default: Option<Value>,
    ) -> Self
    where
        V: FromValue + ToValue + 'static,
    {
        self.properties.push(Property {
            name,
            read: Box::new(move |target| Ok(get(target).to_value())),
            write: Box::new(move |target, value| {
                set(target, V::from_value(value)?);
                Ok(())
            }),
            default,
        });
        self
    }

    /// Finalizes the set.
    #[must_use]
    pub fn build(self) -> PropertySet<T> {
        PropertySet {
            properties: self.properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Error, Size};

    #[derive(Default)]
    struct Window {
        left: i32,
        top: i32,
        title: String,
        size: Size,
        accent: Option<Color>,
    }

    fn window_properties() -> PropertySet<Window> {
        PropertySet::builder()
            .field("Left", |w: &Window| w.left, |w, v| w.left = v)
            .field_with_default("Top", |w: &Window| w.top, |w, v| w.top = v, 0)
            .field("Title", |w: &Window| w.title.clone(), |w, v| w.title = v)
            .field("Size", |w: &Window| w.size, |w, v| w.size = v)
            .field("Accent", |w: &Window| w.accent, |w, v| w.accent = v)
            .build()
    }

    fn properties_from(json: serde_json::Value) -> ValueMap {
        match Value::from_json(&json) {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_populates_tagged_members() {
        let set = window_properties();
        let mut window = Window::default();
        set.bind(
            &mut window,
            &properties_from(serde_json::json!({
                "left": 100,
                "TITLE": "main",
                "size": {"width": 800, "height": 600},
                "accent": "red"
            })),
        );

        assert_eq!(window.left, 100);
        assert_eq!(window.title, "main");
        assert_eq!(window.size, Size::new(800, 600));
        assert_eq!(window.accent, Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_bind_survives_member_failure() {
        let set = window_properties();
        let mut window = Window::default();
        set.bind(
            &mut window,
            &properties_from(serde_json::json!({
                "left": "not a number",
                "title": "still bound"
            })),
        );

        // The broken member is skipped; its sibling still binds.
        assert_eq!(window.left, 0);
        assert_eq!(window.title, "still bound");
    }

    #[test]
    fn test_bind_leaves_absent_members_unchanged() {
        let set = window_properties();
        let mut window = Window {
            left: 7,
            ..Window::default()
        };
        set.bind(&mut window, &properties_from(serde_json::json!({"top": 3})));
        assert_eq!(window.left, 7);
        assert_eq!(window.top, 3);
    }

    #[test]
    fn test_extract_suppresses_defaults_and_nulls() {
        let set = window_properties();
        let window = Window {
            left: 10,
            top: 0, // equals the declared default
            title: "main".to_string(),
            size: Size::new(1, 2),
            accent: None, // null, omitted
        };
        let map = set.extract(&window);

        assert_eq!(map.get("Left"), Some(&Value::Int(10)));
        assert!(map.get("Top").is_none());
        assert!(map.get("Accent").is_none());
        assert_eq!(map.get("Title"), Some(&Value::from("main")));
        // Composite members extract as field maps.
        let size = map.get("Size").and_then(|v| v.as_object()).unwrap();
        assert_eq!(size.get("width"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_extract_preserves_declared_casing() {
        let set = window_properties();
        let map = set.extract(&Window {
            left: 1,
            ..Window::default()
        });
        assert!(map.keys().any(|k| k.as_str() == "Left"));
    }

    #[test]
    fn test_extract_records_read_failure() {
        let set: PropertySet<Window> = PropertySet::builder()
            .computed(
                "Broken",
                |_: &Window| Err(Error::custom("accessor blew up")),
                |_: &mut Window, _: &Value| Ok(()),
            )
            .field("Left", |w: &Window| w.left, |w, v| w.left = v)
            .build();

        let map = set.extract(&Window::default());
        let diagnostic = map.get("Broken").and_then(|v| v.as_str()).unwrap();
        assert!(diagnostic.contains("accessor blew up"));
        // The failure did not abort the rest of the extraction.
        assert_eq!(map.get("Left"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_round_trip_through_bind() {
        let set = window_properties();
        let original = Window {
            left: 5,
            top: 9,
            title: "roundtrip".to_string(),
            size: Size::new(3, 4),
            accent: Some(Color::rgb(0, 0, 255)),
        };

        let extracted = set.extract(&original);
        let mut rebuilt = Window::default();
        set.bind(&mut rebuilt, &extracted);

        assert_eq!(rebuilt.left, original.left);
        assert_eq!(rebuilt.top, original.top);
        assert_eq!(rebuilt.title, original.title);
        assert_eq!(rebuilt.size, original.size);
        assert_eq!(rebuilt.accent, original.accent);
    }
}
