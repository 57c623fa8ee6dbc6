/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{lax, Value};
///
/// let config = lax!({
///     "Title": "main",
///     "Left": 100,
///     "Flags": [1, 2, 3]
/// });
///
/// let map = config.as_object().unwrap();
/// assert_eq!(map.get("title"), Some(&Value::from("main")));
/// ```
#[macro_export]
macro_rules! lax {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::lax!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key, $crate::lax!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression with a Value conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Declares an enum whose members coerce by exact name match.
///
/// Generates the enum itself plus `name`/`from_name` accessors, `Display`,
/// and the [`FromValue`](crate::FromValue)/[`ToValue`](crate::ToValue)
/// impls, so the type plugs straight into coercion and property binding.
///
/// # Examples
///
/// ```rust
/// use serde_lax::{from_value, text_enum, Value};
///
/// text_enum! {
///     /// Window docking edge.
///     pub enum DockEdge { Left, Right, Top, Bottom }
/// }
///
/// assert_eq!(from_value::<DockEdge>(&Value::from("Left")).unwrap(), DockEdge::Left);
/// assert!(from_value::<DockEdge>(&Value::from("left")).is_err()); // exact match
/// ```
#[macro_export]
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)+
        }

        impl $name {
            /// All members, in declaration order.
            pub const MEMBERS: &'static [$name] = &[$($name::$variant),+];

            /// The member's declared name.
            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            /// Finds the member with exactly this name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<$name> {
                match name {
                    $(stringify!($variant) => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $crate::FromValue for $name {
            fn from_value(value: &$crate::Value) -> $crate::Result<Self> {
                match value {
                    $crate::Value::Null => Err($crate::Error::null_value(stringify!($name))),
                    other => {
                        let text = other.to_string();
                        $name::from_name(&text).ok_or_else(|| {
                            $crate::Error::unknown_variant(stringify!($name), &text)
                        })
                    }
                }
            }
        }

        impl $crate::ToValue for $name {
            fn to_value(&self) -> $crate::Value {
                $crate::Value::String(self.name().to_string())
            }
        }
    };
}
