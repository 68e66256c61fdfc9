use std::process;

use clap::{Arg, ArgAction, Command};

use bzql::commands::auth::handle_auth;
use bzql::commands::bugs::{handle_bug, handle_bugs};
use bzql::commands::query::handle_query;
use bzql::commands::schema::handle_schema;
use bzql::logging::{init_logging, log_error};

fn format_arg(default: &'static str) -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format")
        .value_parser([default, "json"])
        .default_value(default)
}

fn fields_arg() -> Arg {
    Arg::new("fields")
        .long("fields")
        .value_name("FIELDS")
        .help("Comma-separated GraphQL fields to request (e.g. id,summary,assignee.name)")
}

#[tokio::main]
async fn main() {
    let app = Command::new("bzql")
        .about("Query Bugzilla through a GraphQL front")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Store or show the Bugzilla API key")
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .value_name("KEY")
                        .help("Set your Bugzilla API key")
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Bugzilla REST base URL (e.g. https://bugzilla.mozilla.org/rest)")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured API key")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("query")
                .about("Execute a GraphQL document and print the JSON response")
                .arg(
                    Arg::new("document")
                        .value_name("DOCUMENT")
                        .help("GraphQL document, e.g. '{ bug(id: \"123\") { id summary } }'")
                        .conflicts_with("file")
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_name("PATH")
                        .help("Read the GraphQL document from a file")
                )
        )
        .subcommand(
            Command::new("bug")
                .about("Show a single bug")
                .arg(
                    Arg::new("id")
                        .value_name("ID")
                        .help("Bug id")
                        .required(true)
                )
                .arg(fields_arg())
                .arg(format_arg("detail"))
        )
        .subcommand(
            Command::new("bugs")
                .about("Search bugs")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .value_name("TERMS")
                        .help("Search terms, e.g. 'status:NEW,ASSIGNED product:Core text:\"crash\"'")
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .value_name("N")
                        .help("Page index (default 0)")
                )
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .value_name("N")
                        .help("Bugs per page (default 100)")
                )
                .arg(fields_arg())
                .arg(format_arg("table"))
        )
        .subcommand(
            Command::new("schema")
                .about("Print the GraphQL schema")
        );

    let matches = app.get_matches();

    // Logging is best effort; the commands work without it
    let _ = init_logging();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("query", sub_matches)) => handle_query(sub_matches).await,
        Some(("bug", sub_matches)) => handle_bug(sub_matches).await,
        Some(("bugs", sub_matches)) => handle_bugs(sub_matches).await,
        Some(("schema", sub_matches)) => handle_schema(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'bzql --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
