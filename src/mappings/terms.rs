use regex::Regex;
use serde_json::Value;

use crate::error::{BugzillaError, BugzillaResult};
use crate::models::SearchCriteria;

lazy_static::lazy_static! {
    static ref TERM_RE: Regex = Regex::new(r#"(\w+):(?:"([^"]*)"|(\S+))"#)
        .expect("search term pattern is valid");
}

/// Parses command-line search text such as
/// `status:NEW,ASSIGNED product:Core text:"crash on start"` into criteria.
///
/// Comma-separated unquoted values become lists; quoted values are kept whole.
/// A repeated key keeps its last value.
pub fn parse_search_terms(input: &str) -> BugzillaResult<SearchCriteria> {
    let mut criteria = SearchCriteria::new();

    if input.trim().is_empty() {
        return Ok(criteria);
    }

    for cap in TERM_RE.captures_iter(input) {
        let key = cap[1].to_string();
        let value = match (cap.get(2), cap.get(3)) {
            (Some(quoted), _) => Value::String(quoted.as_str().to_string()),
            (None, Some(raw)) if raw.as_str().contains(',') => Value::Array(
                raw.as_str()
                    .split(',')
                    .filter(|part| !part.is_empty())
                    .map(|part| Value::String(part.to_string()))
                    .collect(),
            ),
            (None, Some(raw)) => Value::String(raw.as_str().to_string()),
            (None, None) => continue,
        };

        criteria.insert(key, value);
    }

    // Every non-blank character must belong to some term
    let leftover = TERM_RE.replace_all(input, "");

    if criteria.is_empty() || !leftover.trim().is_empty() {
        return Err(BugzillaError::ParseError(format!(
            "Could not parse search '{}'. Use key:value terms (e.g. status:NEW,ASSIGNED product:Core)",
            input
        )));
    }

    Ok(criteria)
}
