use serde::Deserialize;

/// Body of `GET /bug` and `GET /bug/{id}`
#[derive(Debug, Deserialize)]
pub struct BugsResponse {
    #[serde(default)]
    pub bugs: Vec<super::Bug>,
}

/// Body Bugzilla sends alongside a non-success status
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    pub code: Option<i64>,
}
