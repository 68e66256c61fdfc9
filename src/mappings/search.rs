use serde_json::Value;

use crate::constants::SEARCH_PARAMS;
use crate::models::{SearchCriteria, TrackerQuery};

fn search_param_name(key: &str) -> &str {
    SEARCH_PARAMS
        .iter()
        .find(|(search, _)| *search == key)
        .map(|(_, param)| *param)
        .unwrap_or(key)
}

/// Translates a search description into tracker query parameters.
///
/// Recognized keys are renamed to their Bugzilla parameter, anything else is
/// forwarded untouched. List values stay lists and go out as repeated
/// parameters. Null values are dropped.
pub fn search_to_query(search: Option<&SearchCriteria>) -> TrackerQuery {
    let mut query = TrackerQuery::new();

    let Some(search) = search else {
        return query;
    };

    for (key, value) in search {
        if value.is_null() {
            continue;
        }

        let value = match value {
            Value::Array(items) => Value::Array(items.iter().filter(|v| !v.is_null()).cloned().collect()),
            other => other.clone(),
        };

        query.insert(search_param_name(key), value);
    }

    query
}

/// The one-key criteria that carries the API key through [`search_to_query`].
pub fn credentials(api_key: Option<&str>) -> SearchCriteria {
    let mut criteria = SearchCriteria::new();
    if let Some(key) = api_key {
        criteria.insert("apiKey".to_string(), Value::String(key.to_string()));
    }
    criteria
}
