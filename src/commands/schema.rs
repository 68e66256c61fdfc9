use async_graphql::{EmptyMutation, EmptySubscription};
use clap::ArgMatches;

use crate::error::BugzillaResult;
use crate::schema::{BugzillaSchema, QueryRoot};

/// SDL of the schema. No loader is touched, so no configuration is needed.
pub fn schema_sdl() -> String {
    BugzillaSchema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}

pub async fn handle_schema(_matches: &ArgMatches) -> BugzillaResult<()> {
    println!("{}", schema_sdl());
    Ok(())
}
