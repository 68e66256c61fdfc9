// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod graphql_fields;
pub mod loaders;
pub mod logging;
pub mod mappings;
pub mod models;
pub mod resolvers;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::BugzillaClient;
pub use config::{Config, load_config, save_config};
pub use error::{BugzillaError, BugzillaResult};
pub use graphql_fields::RequestedFields;
pub use loaders::Loader;
pub use resolvers::BugResolvers;
pub use schema::{BugzillaSchema, build_schema};
pub use models::*;
