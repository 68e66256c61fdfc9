use async_trait::async_trait;

use super::Loader;
use crate::client::BugzillaClient;
use crate::error::BugzillaResult;
use crate::models::{Bug, BugsKey};

/// Loads one page of search results with `GET /bug`.
#[derive(Clone)]
pub struct BugsLoader {
    client: BugzillaClient,
}

impl BugsLoader {
    pub fn new(client: BugzillaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Loader<BugsKey> for BugsLoader {
    type Value = Vec<Bug>;

    async fn load(&self, key: BugsKey) -> BugzillaResult<Vec<Bug>> {
        self.client.search_bugs(&key.query, &key.paging).await
    }
}
