//! Translation from GraphQL request shapes to Bugzilla query parameters.
//!
//! Everything in here is pure: no I/O, no shared state.

pub mod fields;
pub mod paging;
pub mod search;
pub mod terms;

pub use fields::{fields_to_include_fields, tracker_field_name};
pub use paging::{effective_paging, merge_paging};
pub use search::{credentials, search_to_query};
pub use terms::parse_search_terms;
