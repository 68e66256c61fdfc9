use async_graphql::{ComplexObject, SimpleObject};
use serde::{Deserialize, Serialize};

use super::User;

/// A Bugzilla bug. Every field is optional because the tracker only returns
/// what `include_fields` asked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(default)]
#[graphql(complex)]
pub struct Bug {
    pub id: Option<i64>,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub resolution: Option<String>,
    pub product: Option<String>,
    pub component: Option<String>,
    pub severity: Option<String>,
    pub priority: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub whiteboard: Option<String>,
    pub url: Option<String>,
    pub version: Option<String>,
    pub platform: Option<String>,
    pub op_sys: Option<String>,
    pub target_milestone: Option<String>,
    pub creation_time: Option<String>,
    pub last_change_time: Option<String>,
    pub depends_on: Option<Vec<i64>>,
    pub blocks: Option<Vec<i64>>,
    pub cc: Option<Vec<String>>,
    #[graphql(skip)]
    pub assigned_to: Option<String>,
    #[graphql(skip)]
    pub assigned_to_detail: Option<User>,
    #[serde(rename = "creator")]
    #[graphql(skip)]
    pub creator_login: Option<String>,
    #[graphql(skip)]
    pub creator_detail: Option<User>,
}

impl Bug {
    pub fn assignee_user(&self) -> Option<User> {
        self.assigned_to_detail
            .clone()
            .or_else(|| self.assigned_to.as_deref().map(User::from_login))
    }

    pub fn creator_user(&self) -> Option<User> {
        self.creator_detail
            .clone()
            .or_else(|| self.creator_login.as_deref().map(User::from_login))
    }
}

#[ComplexObject]
impl Bug {
    async fn assignee(&self) -> Option<User> {
        self.assignee_user()
    }

    async fn creator(&self) -> Option<User> {
        self.creator_user()
    }
}
