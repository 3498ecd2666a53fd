pub mod health;
pub mod helpers;
pub mod identity;
pub mod links;
pub mod types;

use actix_web::web;

pub use health::{AppStartTime, HealthService, health_routes};

/// `/api` 路由配置
///
/// - POST /api/get-user-id
/// - POST /api/generate-link
/// - GET  /api/user-links/{user_id}
/// - GET  /api/link-info/{short_code}
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/get-user-id", web::post().to(identity::get_user_id))
        .route("/generate-link", web::post().to(links::generate_link))
        .route("/user-links/{user_id}", web::get().to(links::user_links))
        .route("/link-info/{short_code}", web::get().to(links::link_info))
}
