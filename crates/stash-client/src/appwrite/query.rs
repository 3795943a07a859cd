//! Appwrite query builder.
//!
//! Queries are sent as JSON strings in repeated `queries[]` parameters.

use serde::Serialize;
use serde_json::Value;

/// A single Appwrite query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

impl Query {
    fn new(method: &'static str, attribute: Option<String>, values: Vec<Value>) -> Self {
        Self {
            method,
            attribute,
            values,
        }
    }

    /// Attribute equals any of `values`.
    pub fn equal<V: Into<Value>>(
        attribute: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::new(
            "equal",
            Some(attribute.into()),
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Array attribute contains any of `values`, or string attribute contains the substring.
    pub fn contains<V: Into<Value>>(
        attribute: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::new(
            "contains",
            Some(attribute.into()),
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Match documents satisfying any of the nested queries.
    pub fn or(queries: impl IntoIterator<Item = Query>) -> Self {
        let values = queries
            .into_iter()
            .map(|q| serde_json::to_value(q).unwrap_or(Value::Null))
            .collect();
        Self::new("or", None, values)
    }

    /// Return at most `limit` documents.
    pub fn limit(limit: u32) -> Self {
        Self::new("limit", None, vec![Value::from(limit)])
    }

    /// Skip documents up to and including the one with this ID.
    pub fn cursor_after(document_id: impl Into<String>) -> Self {
        Self::new("cursorAfter", None, vec![Value::from(document_id.into())])
    }

    /// Sort ascending by attribute.
    pub fn order_asc(attribute: impl Into<String>) -> Self {
        Self::new("orderAsc", Some(attribute.into()), Vec::new())
    }

    /// Sort descending by attribute.
    pub fn order_desc(attribute: impl Into<String>) -> Self {
        Self::new("orderDesc", Some(attribute.into()), Vec::new())
    }

    /// Serialize to the JSON string Appwrite expects.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal() {
        let q = Query::equal("accountId", ["acct-1"]);
        assert_eq!(
            serde_json::to_value(&q).expect("serialize"),
            json!({"method": "equal", "attribute": "accountId", "values": ["acct-1"]})
        );
    }

    #[test]
    fn test_or_nests_queries() {
        let q = Query::or([
            Query::equal("owner", ["u1"]),
            Query::contains("users", ["a@b.c"]),
        ]);
        let value = serde_json::to_value(&q).expect("serialize");
        assert_eq!(value["method"], "or");
        assert!(value.get("attribute").is_none());
        assert_eq!(value["values"][1]["method"], "contains");
        assert_eq!(value["values"][1]["values"][0], "a@b.c");
    }

    #[test]
    fn test_order_and_limit() {
        assert_eq!(
            Query::order_desc("$createdAt").to_json(),
            r#"{"method":"orderDesc","attribute":"$createdAt"}"#
        );
        assert_eq!(Query::limit(6).to_json(), r#"{"method":"limit","values":[6]}"#);
        assert_eq!(
            Query::cursor_after("f24").to_json(),
            r#"{"method":"cursorAfter","values":["f24"]}"#
        );
    }
}
