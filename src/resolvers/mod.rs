pub mod bugs;

pub use bugs::{BugResolvers, DynBugLoader, DynBugsLoader};
