//! Request and response bodies for the `/api` endpoints

use serde::{Deserialize, Serialize};

use crate::storage::{Link, LinkWithOwner};

/// `POST /api/get-user-id`
#[derive(Deserialize, Clone, Debug, Default)]
pub struct GetUserIdRequest {
    #[serde(default)]
    pub personal_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GetUserIdResponse {
    pub personal_id: String,
    pub is_new: bool,
}

/// `POST /api/generate-link`
#[derive(Deserialize, Clone, Debug, Default)]
pub struct GenerateLinkBody {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerateLinkResponse {
    pub success: bool,
    pub generated_link: String,
    pub short_code: String,
    pub link_id: i64,
}

/// `GET /api/user-links/{user_id}`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserLinksResponse {
    pub links: Vec<Link>,
}

/// `GET /api/link-info/{short_code}`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkInfoResponse {
    pub link: LinkWithOwner,
}

/// Body of every failed request
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /health`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
    pub users: Option<u64>,
    pub links: Option<u64>,
    pub uptime: u64,
    pub response_time_ms: u64,
}
