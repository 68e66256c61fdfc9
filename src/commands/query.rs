use std::fs;

use clap::ArgMatches;
use colored::*;

use super::{build_resolvers, resolved_config};
use crate::error::{BugzillaError, BugzillaResult};
use crate::logging::{log_error, log_info};
use crate::schema::build_schema;

/// Runs a GraphQL document against the schema and prints the response.
pub async fn handle_query(matches: &ArgMatches) -> BugzillaResult<()> {
    let document = match (matches.get_one::<String>("document"), matches.get_one::<String>("file")) {
        (Some(document), _) => document.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(BugzillaError::InvalidInput(
                "Provide a GraphQL document or --file <PATH>".to_string(),
            ))
        }
    };

    let schema = build_schema(build_resolvers(&resolved_config())?);
    log_info("Executing GraphQL document");

    let response = schema.execute(document.as_str()).await;

    if !response.errors.is_empty() {
        let messages = response
            .errors
            .iter()
            .map(|e| e.message.clone())
            .collect::<Vec<_>>()
            .join(", ");
        log_error(&format!("GraphQL errors: {}", messages));

        for error in &response.errors {
            eprintln!("{} {}", "error:".red().bold(), error.message);
        }
        return Err(BugzillaError::GraphQLError(messages));
    }

    println!("{}", serde_json::to_string_pretty(&response.data)?);
    Ok(())
}
