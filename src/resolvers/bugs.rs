use std::sync::Arc;

use crate::client::BugzillaClient;
use crate::constants::INCLUDE_FIELDS_PARAM;
use crate::error::BugzillaResult;
use crate::graphql_fields::RequestedFields;
use crate::loaders::{BugLoader, BugsLoader, Loader};
use crate::logging::log_debug;
use crate::mappings::{credentials, effective_paging, fields_to_include_fields, search_to_query};
use crate::models::{Bug, BugKey, BugsKey, PagingInput, SearchCriteria, TrackerQuery};

pub type DynBugLoader = Arc<dyn Loader<BugKey, Value = Bug>>;
pub type DynBugsLoader = Arc<dyn Loader<BugsKey, Value = Vec<Bug>>>;

/// The `bug` and `bugs` query resolvers.
///
/// Both build a [`TrackerQuery`] from the requested fields and arguments and
/// hand it to a loader. Loader errors are returned exactly as produced.
#[derive(Clone)]
pub struct BugResolvers {
    api_key: Option<String>,
    bug: DynBugLoader,
    bugs: DynBugsLoader,
}

impl BugResolvers {
    pub fn new(api_key: Option<String>, bug: DynBugLoader, bugs: DynBugsLoader) -> Self {
        Self { api_key, bug, bugs }
    }

    /// Resolvers backed by the REST loaders of a single client.
    pub fn from_client(api_key: Option<String>, client: BugzillaClient) -> Self {
        Self::new(
            api_key,
            Arc::new(BugLoader::new(client.clone())),
            Arc::new(BugsLoader::new(client)),
        )
    }

    fn credentials_query(&self) -> TrackerQuery {
        search_to_query(Some(&credentials(self.api_key.as_deref())))
    }

    fn include_fields_query(requested: &RequestedFields) -> TrackerQuery {
        TrackerQuery::new().with(
            INCLUDE_FIELDS_PARAM,
            fields_to_include_fields(requested.paths()),
        )
    }

    /// `include_fields`, then the API key.
    pub fn bug_query(&self, requested: &RequestedFields) -> TrackerQuery {
        Self::include_fields_query(requested).merge(self.credentials_query())
    }

    /// Search parameters, then `include_fields`, then the API key. Later
    /// parts win on a shared key, so search input cannot drop the key.
    pub fn bugs_query(&self, search: Option<&SearchCriteria>, requested: &RequestedFields) -> TrackerQuery {
        search_to_query(search)
            .merge(Self::include_fields_query(requested))
            .merge(self.credentials_query())
    }

    pub async fn bug(&self, id: &str, requested: &RequestedFields) -> BugzillaResult<Bug> {
        let key = BugKey {
            id: id.to_string(),
            query: self.bug_query(requested),
        };

        log_debug(&format!("bug({}) fields=[{}]", id, requested));
        self.bug.load(key).await
    }

    pub async fn bugs(
        &self,
        search: Option<&SearchCriteria>,
        paging: Option<&PagingInput>,
        requested: &RequestedFields,
    ) -> BugzillaResult<Vec<Bug>> {
        let key = BugsKey {
            query: self.bugs_query(search, requested),
            paging: effective_paging(paging),
        };

        log_debug(&format!(
            "bugs(page={}, pageSize={}) fields=[{}]",
            key.paging.page, key.paging.page_size, requested
        ));
        self.bugs.load(key).await
    }
}
