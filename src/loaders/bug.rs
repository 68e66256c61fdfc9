use async_trait::async_trait;

use super::Loader;
use crate::client::BugzillaClient;
use crate::error::BugzillaResult;
use crate::models::{Bug, BugKey};

/// Loads one bug by id with `GET /bug/{id}`.
#[derive(Clone)]
pub struct BugLoader {
    client: BugzillaClient,
}

impl BugLoader {
    pub fn new(client: BugzillaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Loader<BugKey> for BugLoader {
    type Value = Bug;

    async fn load(&self, key: BugKey) -> BugzillaResult<Bug> {
        self.client.get_bug(&key.id, &key.query).await
    }
}
