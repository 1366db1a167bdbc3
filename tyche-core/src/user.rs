use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_ROLE: &str = "user";

/// Site account. Only the store knows about users; no route creates or reads them.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
}

impl NewUser {
    pub fn into_user(self, id: i64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            role: self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            created_at,
        }
    }
}
