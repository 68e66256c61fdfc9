use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// The `*_detail` user objects Bugzilla attaches to a bug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(default)]
pub struct User {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub real_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Older Bugzilla releases only return the login.
    pub fn from_login(login: &str) -> Self {
        User {
            name: Some(login.to_string()),
            email: Some(login.to_string()),
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> &str {
        self.real_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.name.as_deref())
            .unwrap_or("-")
    }
}
