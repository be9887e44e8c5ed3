//! The top-level `{data, errors}` structure of a GraphQL response.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::graphql::GraphqlError;

/// A decoded GraphQL response envelope.
///
/// Only one side is authoritative: when `errors` is populated the response
/// is a failure and `data` is ignored.
///
/// # Example
///
/// ```rust
/// use stash_client::clients::graphql::GraphqlEnvelope;
///
/// let envelope: GraphqlEnvelope =
///     serde_json::from_str(r#"{"data": {"version": {"version": "v0.27.2"}}}"#).unwrap();
/// assert!(!envelope.has_errors());
/// assert_eq!(envelope.into_result().unwrap()["version"]["version"], "v0.27.2");
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct GraphqlEnvelope {
    /// The query result, if any.
    #[serde(default)]
    pub data: Option<Value>,
    /// GraphQL errors, if any.
    #[serde(default)]
    pub errors: Option<Value>,
}

impl GraphqlEnvelope {
    /// Returns `true` if the `errors` entry is populated.
    ///
    /// An empty array or `null` counts as no errors. Any other non-array
    /// value is treated as an error report.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            None | Some(Value::Null) => false,
            Some(Value::Array(errors)) => !errors.is_empty(),
            Some(_) => true,
        }
    }

    /// Decodes a response body and converts it with
    /// [`into_result`](Self::into_result).
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Decode`] if `body` is not a JSON envelope, or
    /// [`GraphqlError::Response`] if the envelope has errors.
    pub fn decode(body: &str) -> Result<Value, GraphqlError> {
        let envelope: Self = serde_json::from_str(body)?;
        envelope.into_result()
    }

    /// Converts the envelope into the `data` value or an error.
    ///
    /// An absent `data` entry becomes [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Response`] if the envelope has errors.
    pub fn into_result(self) -> Result<Value, GraphqlError> {
        if self.has_errors() {
            return Err(GraphqlError::Response {
                errors: self.errors.unwrap_or_default(),
            });
        }
        Ok(self.data.unwrap_or_default())
    }
}
