//! The fetch side of the resolvers.
//!
//! Resolvers only ever call [`Loader::load`]; who builds a loader and how long
//! it lives is up to the caller.

pub mod bug;
pub mod bugs;

pub use bug::BugLoader;
pub use bugs::BugsLoader;

use async_trait::async_trait;

use crate::error::BugzillaResult;

/// Resolves a key to a value, usually over the network.
#[async_trait]
pub trait Loader<K>: Send + Sync
where
    K: Send + 'static,
{
    type Value;

    async fn load(&self, key: K) -> BugzillaResult<Self::Value>;
}
