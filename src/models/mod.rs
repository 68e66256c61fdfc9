pub mod bug;
pub mod query;
pub mod response;
pub mod user;

// Re-export commonly used types
pub use bug::Bug;
pub use query::{BugKey, BugsKey, Paging, PagingInput, SearchCriteria, TrackerQuery};
pub use response::{BugsResponse, ErrorResponse};
pub use user::User;
