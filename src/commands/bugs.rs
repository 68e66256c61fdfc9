use clap::ArgMatches;

use super::{build_resolvers, fields_arg, resolved_config};
use crate::error::{BugzillaError, BugzillaResult};
use crate::formatting::{print_bugs, print_single_bug};
use crate::graphql_fields::selections;
use crate::logging::log_info;
use crate::mappings::parse_search_terms;
use crate::models::PagingInput;

fn parse_number(matches: &ArgMatches, name: &str) -> BugzillaResult<Option<u32>> {
    matches
        .get_one::<String>(name)
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| BugzillaError::InvalidInput(format!("--{} expects a number, got '{}'", name, s)))
        })
        .transpose()
}

pub async fn handle_bug(matches: &ArgMatches) -> BugzillaResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| BugzillaError::InvalidInput("Bug id is required".to_string()))?;
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("detail");
    let requested = fields_arg(matches.get_one::<String>("fields"), selections::bug_detail_fields());

    let resolvers = build_resolvers(&resolved_config())?;
    log_info(&format!("Fetching bug {}", id));

    let bug = resolvers.bug(id, &requested).await?;
    print_single_bug(&bug, format)
}

pub async fn handle_bugs(matches: &ArgMatches) -> BugzillaResult<()> {
    let search = match matches.get_one::<String>("search") {
        Some(text) => Some(parse_search_terms(text)?),
        None => None,
    };
    let paging = PagingInput {
        page_size: parse_number(matches, "page-size")?,
        page: parse_number(matches, "page")?,
    };
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("table");
    let requested = fields_arg(matches.get_one::<String>("fields"), selections::bug_list_fields());

    let resolvers = build_resolvers(&resolved_config())?;
    log_info(&format!("Searching bugs: {:?}", search));

    let bugs = resolvers.bugs(search.as_ref(), Some(&paging), &requested).await?;
    print_bugs(&bugs, format)
}
