//! Configuration for JSON normalization.
//!
//! [`LaxOptions`] is an immutable configuration value constructed once and
//! passed explicitly to each normalization call. There is no process-wide
//! options state.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lax::{LaxOptions, Value};
//!
//! // Keep string booleans as strings instead of folding them
//! let options = LaxOptions::new().with_fold_bool_strings(false);
//! let node = serde_json::json!("true");
//! let value = Value::from_json_with_options(&node, &options);
//! assert_eq!(value.as_str(), Some("true"));
//! ```

/// Configuration options for normalizing parsed JSON into [`Value`](crate::Value).
///
/// The defaults match the lenient ingestion behavior: quoted booleans fold to
/// real booleans and null entries disappear from arrays and objects.
///
/// # Examples
///
/// ```rust
/// use serde_lax::LaxOptions;
///
/// let options = LaxOptions::new();
/// assert!(options.fold_bool_strings);
/// assert!(!options.keep_nulls);
///
/// let strict = LaxOptions::new()
///     .with_fold_bool_strings(false)
///     .with_keep_nulls(true);
/// assert!(strict.keep_nulls);
/// ```
#[derive(Clone, Debug)]
pub struct LaxOptions {
    /// Fold strings case-insensitively equal to `"true"`/`"false"` into
    /// booleans. Supports producers that cannot emit native JSON booleans.
    pub fold_bool_strings: bool,
    /// Keep null entries inside arrays and objects instead of dropping them.
    pub keep_nulls: bool,
}

impl Default for LaxOptions {
    fn default() -> Self {
        LaxOptions {
            fold_bool_strings: true,
            keep_nulls: false,
        }
    }
}

impl LaxOptions {
    /// Creates the default lenient options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `"true"`/`"false"` strings fold into booleans.
    #[must_use]
    pub fn with_fold_bool_strings(mut self, fold: bool) -> Self {
        self.fold_bool_strings = fold;
        self
    }

    /// Sets whether null entries are kept in arrays and objects.
    ///
    /// Off by default: downstream code treats "absent" and "null"
    /// identically, so normalization drops them.
    #[must_use]
    pub fn with_keep_nulls(mut self, keep: bool) -> Self {
        self.keep_nulls = keep;
        self
    }
}
