//! Shared request and response handling for the `find*` queries.

use serde_json::Value;

use crate::stash::queries::{FIND_PERFORMERS_QUERY, FIND_SCENES_QUERY};
use crate::stash::{FindFilter, StashError};

/// One page of `findPerformers` / `findScenes` results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindResult {
    /// The records on this page.
    pub items: Vec<Value>,
    /// Total number of matching records reported by the server.
    pub count: u64,
}

/// Describes where a find query's results live in the response.
pub(crate) struct FindQuery {
    pub(crate) document: &'static str,
    pub(crate) root: &'static str,
    pub(crate) list: &'static str,
}

pub(crate) const FIND_PERFORMERS: FindQuery = FindQuery {
    document: FIND_PERFORMERS_QUERY,
    root: "findPerformers",
    list: "performers",
};

pub(crate) const FIND_SCENES: FindQuery = FindQuery {
    document: FIND_SCENES_QUERY,
    root: "findScenes",
    list: "scenes",
};

/// Builds `{filter: ...}` from the defaults and the caller's overrides.
pub(crate) fn variables(filter: Option<&FindFilter>) -> Value {
    let filter = filter.map_or_else(|| FindFilter::new().merged(), FindFilter::merged);
    serde_json::json!({ "filter": filter })
}

/// Extracts `{root}.{list}` and `{root}.count` from a response's `data`.
pub(crate) fn unwrap_find_result(data: Value, find: &FindQuery) -> Result<FindResult, StashError> {
    let missing = |path: String| StashError::MissingField { path };

    let mut root = match data {
        Value::Object(mut map) => map.remove(find.root),
        _ => None,
    }
    .filter(Value::is_object)
    .ok_or_else(|| missing(find.root.to_string()))?;

    let items = match root.get_mut(find.list).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => return Err(missing(format!("{}.{}", find.root, find.list))),
    };

    let count = root
        .get("count")
        .and_then(Value::as_u64)
        .unwrap_or_else(|| u64::try_from(items.len()).unwrap_or(u64::MAX));

    Ok(FindResult { items, count })
}
