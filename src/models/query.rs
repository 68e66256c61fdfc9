use std::collections::BTreeMap;

use async_graphql::InputObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{API_KEY_PARAM, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, INCLUDE_FIELDS_PARAM};

/// Caller-supplied search description, keyed by user-facing names.
pub type SearchCriteria = BTreeMap<String, Value>;

/// Bugzilla REST query parameters, keyed by tracker parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackerQuery {
    params: BTreeMap<String, Value>,
}

impl TrackerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing and returning any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.params.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merges `other` into this query. Keys present in both take `other`'s value.
    pub fn merge(mut self, other: TrackerQuery) -> Self {
        self.params.extend(other.params);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders the query as URL parameters: `include_fields` comma-joined,
    /// other lists as repeated parameters, nulls and empty lists dropped.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (key, value) in &self.params {
            match value {
                Value::Null => {}
                Value::Array(items) if key == INCLUDE_FIELDS_PARAM => {
                    let joined = items
                        .iter()
                        .filter_map(param_value)
                        .collect::<Vec<_>>()
                        .join(",");
                    if !joined.is_empty() {
                        pairs.push((key.clone(), joined));
                    }
                }
                Value::Array(items) => {
                    for item in items {
                        if let Some(v) = param_value(item) {
                            pairs.push((key.clone(), v));
                        }
                    }
                }
                other => {
                    if let Some(v) = param_value(other) {
                        pairs.push((key.clone(), v));
                    }
                }
            }
        }

        pairs
    }

    /// Same as [`to_query_pairs`](Self::to_query_pairs) with the API key masked, for logs.
    pub fn redacted_pairs(&self) -> Vec<(String, String)> {
        self.to_query_pairs()
            .into_iter()
            .map(|(key, value)| {
                if key == API_KEY_PARAM {
                    (key, "***".to_string())
                } else {
                    (key, value)
                }
            })
            .collect()
    }
}

fn param_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Result window for multi-bug queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page_size: u32,
    pub page: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Paging {
            page_size: DEFAULT_PAGE_SIZE,
            page: DEFAULT_PAGE,
        }
    }
}

impl Paging {
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }
}

/// Paging as the caller supplies it; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct PagingInput {
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

/// Key handed to the single-bug loader
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BugKey {
    pub id: String,
    pub query: TrackerQuery,
}

/// Key handed to the bug-search loader
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BugsKey {
    pub query: TrackerQuery,
    pub paging: Paging,
}
