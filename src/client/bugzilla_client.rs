use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::{LIMIT_PARAM, OFFSET_PARAM};
use crate::error::{BugzillaError, BugzillaResult};
use crate::logging::{log_debug, log_error};
use crate::models::*;

/// Thin REST client for the Bugzilla `/bug` endpoints.
///
/// The client adds nothing to a query beyond paging: credentials and
/// `include_fields` are already part of the [`TrackerQuery`].
#[derive(Clone)]
pub struct BugzillaClient {
    client: reqwest::Client,
    base_url: Url,
}

impl BugzillaClient {
    pub fn new(base_url: &str) -> BugzillaResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(crate::constants::DEFAULT_TIMEOUT_SECS))
    }

    pub fn from_config(config: &Config) -> BugzillaResult<Self> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> BugzillaResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BugzillaError::ConfigError(format!("Invalid Bugzilla URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BugzillaError::ConfigError(format!(
                "Bugzilla URL '{}' cannot carry a path",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/bug/...`, each extra segment percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("bug").extend(segments);
        }
        url
    }

    /// The id always stays a single path segment: `/`, `?` and `#` are escaped.
    pub fn bug_url(&self, id: &str) -> BugzillaResult<Url> {
        let id = id.trim();
        if id.is_empty() || id == "." || id == ".." {
            return Err(BugzillaError::InvalidInput(format!("Invalid bug id '{}'", id)));
        }
        Ok(self.endpoint(&[id]))
    }

    pub fn search_url(&self) -> Url {
        self.endpoint(&[])
    }

    /// Parameters for a search request: the query plus `limit`/`offset`.
    pub fn search_params(query: &TrackerQuery, paging: &Paging) -> Vec<(String, String)> {
        let mut params = query.to_query_pairs();
        params.extend(paging_params(paging));
        params
    }

    async fn execute_get<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(String, String)],
        redacted: &[(String, String)],
    ) -> BugzillaResult<T> {
        log_debug(&format!("GET {} {:?}", url, redacted));

        let response = self.client.get(url.clone()).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = error_for_status(status, &body);

            log_error(&format!("GET {} failed: {}", url, error));
            return Err(error);
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn get_bug(&self, id: &str, query: &TrackerQuery) -> BugzillaResult<Bug> {
        let url = self.bug_url(id)?;
        let data: BugsResponse = self
            .execute_get(url, &query.to_query_pairs(), &query.redacted_pairs())
            .await?;

        first_bug(id, data)
    }

    pub async fn search_bugs(&self, query: &TrackerQuery, paging: &Paging) -> BugzillaResult<Vec<Bug>> {
        let params = Self::search_params(query, paging);
        let mut redacted = query.redacted_pairs();
        redacted.extend(paging_params(paging));

        let data: BugsResponse = self.execute_get(self.search_url(), &params, &redacted).await?;
        Ok(data.bugs)
    }
}

fn paging_params(paging: &Paging) -> [(String, String); 2] {
    [
        (LIMIT_PARAM.to_string(), paging.limit().to_string()),
        (OFFSET_PARAM.to_string(), paging.offset().to_string()),
    ]
}

/// Maps a non-success response to an error, preferring Bugzilla's own `message`.
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> BugzillaError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::NOT_FOUND => BugzillaError::NotFound(message),
        _ => BugzillaError::ApiError(format!("HTTP {}: {}", status, message)),
    }
}

/// `GET /bug/{id}` answers with a list; an empty one means no such bug.
pub(crate) fn first_bug(id: &str, data: BugsResponse) -> BugzillaResult<Bug> {
    data.bugs
        .into_iter()
        .next()
        .ok_or_else(|| BugzillaError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> BugzillaClient {
        BugzillaClient::new("https://bugzilla.example.org/rest/").unwrap()
    }

    #[test]
    fn test_urls_trim_trailing_slash() {
        assert_eq!(client().bug_url("123").unwrap().as_str(), "https://bugzilla.example.org/rest/bug/123");
        assert_eq!(client().search_url().as_str(), "https://bugzilla.example.org/rest/bug");

        let bare = BugzillaClient::new("https://bugzilla.example.org/rest").unwrap();
        assert_eq!(bare.bug_url("123").unwrap().as_str(), "https://bugzilla.example.org/rest/bug/123");
    }

    #[test]
    fn test_bug_id_stays_one_path_segment() {
        let url = client().bug_url("1/comment?x=y").unwrap();
        assert_eq!(url.path(), "/rest/bug/1%2Fcomment%3Fx=y");
        assert_eq!(url.query(), None);

        let url = client().bug_url("1/comment?include_fields=_all").unwrap();
        assert_eq!(url.path_segments().unwrap().count(), 3);
        assert_eq!(url.query(), None);

        let url = client().bug_url("../user/5").unwrap();
        assert!(url.path().starts_with("/rest/bug/"));
        assert_eq!(url.path_segments().unwrap().count(), 3);

        let url = client().bug_url("5#frag").unwrap();
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_dot_and_empty_ids_rejected() {
        for id in ["", " ", ".", ".."] {
            assert!(matches!(client().bug_url(id), Err(BugzillaError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(BugzillaClient::new("not a url"), Err(BugzillaError::ConfigError(_))));
        assert!(matches!(BugzillaClient::new("mailto:bugs@example.org"), Err(BugzillaError::ConfigError(_))));
    }

    #[test]
    fn test_not_found_status() {
        let body = r#"{"error":true,"code":101,"message":"Bug #999 does not exist."}"#;
        match error_for_status(StatusCode::NOT_FOUND, body) {
            BugzillaError::NotFound(msg) => assert_eq!(msg, "Bug #999 does not exist."),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_other_status_carries_bugzilla_message() {
        let body = r#"{"error":true,"code":306,"message":"The API key you specified is invalid."}"#;
        match error_for_status(StatusCode::UNAUTHORIZED, body) {
            BugzillaError::ApiError(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("The API key you specified is invalid."));
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_error_body_is_kept() {
        match error_for_status(StatusCode::BAD_GATEWAY, "upstream down") {
            BugzillaError::ApiError(msg) => assert!(msg.ends_with("upstream down")),
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_bug_list_is_not_found() {
        let empty: BugsResponse = serde_json::from_value(json!({ "bugs": [] })).unwrap();
        match first_bug("123", empty) {
            Err(BugzillaError::NotFound(id)) => assert_eq!(id, "123"),
            other => panic!("Expected NotFound, got {:?}", other),
        }

        let one: BugsResponse = serde_json::from_value(json!({ "bugs": [{ "id": 123, "summary": "Crash" }] })).unwrap();
        let bug = first_bug("123", one).unwrap();
        assert_eq!(bug.id, Some(123));
        assert_eq!(bug.summary.as_deref(), Some("Crash"));
    }

    #[test]
    fn test_search_params_include_paging() {
        let query = TrackerQuery::new()
            .with("include_fields", json!(["id", "summary"]))
            .with("status", json!("NEW"));
        let paging = Paging { page_size: 20, page: 2 };

        let params = BugzillaClient::search_params(&query, &paging);
        assert_eq!(
            params,
            vec![
                ("include_fields".to_string(), "id,summary".to_string()),
                ("status".to_string(), "NEW".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("offset".to_string(), "40".to_string()),
            ]
        );
    }
}
