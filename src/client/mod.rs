pub mod bugzilla_client;

pub use bugzilla_client::BugzillaClient;
