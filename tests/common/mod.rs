// Shared between integration test binaries; not every helper is used by each.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bzql::{Bug, BugKey, BugResolvers, BugsKey, BugzillaError, BugzillaResult, Loader};

pub const API_KEY: &str = "test-api-key";

/// Records every key it is asked for and answers from a canned result.
pub struct RecordingLoader<K, V> {
    pub calls: Mutex<Vec<K>>,
    respond: Box<dyn Fn(&K) -> BugzillaResult<V> + Send + Sync>,
}

impl<K, V> RecordingLoader<K, V> {
    pub fn new(respond: impl Fn(&K) -> BugzillaResult<V> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    pub fn calls(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<K, V> Loader<K> for RecordingLoader<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync,
{
    type Value = V;

    async fn load(&self, key: K) -> BugzillaResult<V> {
        let result = (self.respond)(&key);
        self.calls.lock().unwrap().push(key);
        result
    }
}

pub fn sample_bug(id: i64) -> Bug {
    Bug {
        id: Some(id),
        summary: Some(format!("Bug number {}", id)),
        status: Some("NEW".to_string()),
        ..Default::default()
    }
}

pub struct Harness {
    pub bug: Arc<RecordingLoader<BugKey, Bug>>,
    pub bugs: Arc<RecordingLoader<BugsKey, Vec<Bug>>>,
    pub resolvers: BugResolvers,
}

pub fn harness(api_key: Option<&str>) -> Harness {
    let bug = RecordingLoader::new(|key: &BugKey| {
        key.id
            .parse::<i64>()
            .map(sample_bug)
            .map_err(|_| BugzillaError::NotFound(key.id.clone()))
    });
    let bugs = RecordingLoader::new(|_: &BugsKey| Ok(vec![sample_bug(1), sample_bug(2)]));

    let resolvers = BugResolvers::new(api_key.map(str::to_string), bug.clone(), bugs.clone());

    Harness { bug, bugs, resolvers }
}
