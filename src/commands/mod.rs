pub mod auth;
pub mod bugs;
pub mod query;
pub mod schema;

use crate::client::BugzillaClient;
use crate::config::{load_config, Config};
use crate::error::BugzillaResult;
use crate::graphql_fields::RequestedFields;
use crate::resolvers::BugResolvers;

/// Stored config with environment overrides applied.
pub fn resolved_config() -> Config {
    load_config().resolve()
}

pub fn build_resolvers(config: &Config) -> BugzillaResult<BugResolvers> {
    let client = BugzillaClient::from_config(config)?;
    Ok(BugResolvers::from_client(config.api_key.clone(), client))
}

/// `--fields id,summary,assignee.name` or the given default selection.
pub fn fields_arg(value: Option<&String>, default: RequestedFields) -> RequestedFields {
    match value {
        Some(list) => list.split(',').map(str::trim).filter(|f| !f.is_empty()).collect(),
        None => default,
    }
}
