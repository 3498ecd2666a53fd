use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anonymous identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub personal_id: String,
    pub created_at: DateTime<Utc>,
}

/// Generated link as exposed on the wire
///
/// Field names follow the table columns: `user_id` is the owner's personal
/// id and `link` is the original destination URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub user_id: String,
    #[serde(rename = "link")]
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

/// Link joined with its owning user's identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkWithOwner {
    #[serde(flatten)]
    pub link: Link,
    pub personal_id: String,
}

/// Values needed to persist a new link
#[derive(Debug, Clone)]
pub struct NewLink {
    pub user_id: String,
    pub original_url: String,
    pub short_code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub storage_type: String,
    pub database_url: String,
}
