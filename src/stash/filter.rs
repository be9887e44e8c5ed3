//! Pagination filter for `findPerformers` / `findScenes` queries.
//!
//! A [`FindFilter`] holds only the caller's overrides. The value sent to the
//! server is built by [`FindFilter::merged`]: the defaults
//! `{per_page: 10000, page: 1}` with each override replacing the default key
//! of the same name. The merge is shallow.

use std::fmt;

use serde_json::{Map, Value};

/// Default page size, large enough to fetch a whole library in one request.
pub const DEFAULT_PER_PAGE: i64 = 10_000;

/// Default page number (Stash pages are 1-based).
pub const DEFAULT_PAGE: i64 = 1;

/// Sort direction for the `direction` filter key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns the GraphQL enum value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller overrides for the Stash `FindFilterType` input.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stash_client::{FindFilter, SortDirection};
///
/// let filter = FindFilter::new()
///     .page(2)
///     .sort("o_counter")
///     .direction(SortDirection::Desc);
///
/// assert_eq!(
///     filter.merged(),
///     json!({"per_page": 10000, "page": 2, "sort": "o_counter", "direction": "DESC"})
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindFilter {
    overrides: Map<String, Value>,
}

impl FindFilter {
    /// Creates a filter with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the default filter entries.
    #[must_use]
    pub fn defaults() -> Map<String, Value> {
        let mut defaults = Map::new();
        defaults.insert("per_page".to_string(), Value::from(DEFAULT_PER_PAGE));
        defaults.insert("page".to_string(), Value::from(DEFAULT_PAGE));
        defaults
    }

    /// Sets the page number.
    #[must_use]
    pub fn page(self, page: i64) -> Self {
        self.set("page", page)
    }

    /// Sets the page size. Stash treats `-1` as "all results".
    #[must_use]
    pub fn per_page(self, per_page: i64) -> Self {
        self.set("per_page", per_page)
    }

    /// Sets the free-text search query.
    #[must_use]
    pub fn q(self, q: impl Into<String>) -> Self {
        self.set("q", Value::String(q.into()))
    }

    /// Sets the field to sort by.
    #[must_use]
    pub fn sort(self, field: impl Into<String>) -> Self {
        self.set("sort", Value::String(field.into()))
    }

    /// Sets the sort direction.
    #[must_use]
    pub fn direction(self, direction: SortDirection) -> Self {
        self.set("direction", direction.as_str())
    }

    /// Sets an arbitrary filter key, replacing any previous value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Returns the caller overrides.
    #[must_use]
    pub const fn overrides(&self) -> &Map<String, Value> {
        &self.overrides
    }

    /// Returns the defaults with the overrides applied on top.
    #[must_use]
    pub fn merged(&self) -> Value {
        let mut merged = Self::defaults();
        for (key, value) in &self.overrides {
            merged.insert(key.clone(), value.clone());
        }
        Value::Object(merged)
    }
}

impl From<Map<String, Value>> for FindFilter {
    fn from(overrides: Map<String, Value>) -> Self {
        Self { overrides }
    }
}
