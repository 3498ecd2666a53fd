//! HTTP API tests
//!
//! Drives the `/api` and `/health` scopes through actix's test harness with
//! a temporary SQLite database per test.

mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};

use common::{REDIRECT_BASE, ScriptedCodes, create_temp_storage, links_config};
use linkgen::api::services::{AppStartTime, api_routes, health_routes};
use linkgen::services::{IdentityService, LinkService};
use linkgen::storage::SeaOrmStorage;
use linkgen::utils::is_base36_code;

struct TestContext {
    storage: Arc<SeaOrmStorage>,
    identity: Arc<IdentityService>,
    links: Arc<LinkService>,
    _dir: tempfile::TempDir,
}

async fn context() -> TestContext {
    let (storage, dir) = create_temp_storage().await;
    TestContext {
        identity: Arc::new(IdentityService::new(storage.clone())),
        links: Arc::new(LinkService::new(storage.clone(), &links_config(5))),
        storage,
        _dir: dir,
    }
}

macro_rules! test_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.storage.clone()))
                .app_data(web::Data::new($ctx.identity.clone()))
                .app_data(web::Data::new($ctx.links.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .service(api_routes())
                .service(health_routes()),
        )
        .await
    };
}

// =============================================================================
// POST /api/get-user-id
// =============================================================================

#[actix_rt::test]
async fn test_get_user_id_without_body() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post().uri("/api/get-user-id").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_new"], json!(true));
    let personal_id = body["personal_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(personal_id).is_ok());
}

#[actix_rt::test]
async fn test_get_user_id_empty_object_and_empty_string() {
    let ctx = context().await;
    let app = test_app!(ctx);

    for payload in [json!({}), json!({ "personal_id": "" })] {
        let req = test::TestRequest::post()
            .uri("/api/get-user-id")
            .set_json(&payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["is_new"], json!(true), "payload {}", payload);
    }

    assert_eq!(ctx.storage.count_users().await.unwrap(), 2);
}

#[actix_rt::test]
async fn test_get_user_id_reuses_known_identity() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post().uri("/api/get-user-id").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    let id = first["personal_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/get-user-id")
        .set_json(json!({ "personal_id": id }))
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(second["personal_id"], json!(id));
    assert_eq!(second["is_new"], json!(false));
}

#[actix_rt::test]
async fn test_get_user_id_unknown_identity_replaced() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/get-user-id")
        .set_json(json!({ "personal_id": "forged-id" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["is_new"], json!(true));
    assert_ne!(body["personal_id"], json!("forged-id"));
}

#[actix_rt::test]
async fn test_get_user_id_malformed_json_is_bad_request() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/get-user-id")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(ctx.storage.count_users().await.unwrap(), 0);
}

// =============================================================================
// POST /api/generate-link
// =============================================================================

#[actix_rt::test]
async fn test_generate_link_response_shape() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/generate-link")
        .set_json(json!({ "user_id": "owner", "original_url": "https://example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    let code = body["short_code"].as_str().unwrap();
    assert!(is_base36_code(code, 6), "bad code {}", code);
    assert_eq!(
        body["generated_link"].as_str().unwrap(),
        format!("{}{}", REDIRECT_BASE, code)
    );
    assert!(body["link_id"].as_i64().unwrap() > 0);
}

#[actix_rt::test]
async fn test_generate_link_missing_fields() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let payloads = [
        Some(json!({ "user_id": "owner" })),
        Some(json!({ "original_url": "https://example.com" })),
        Some(json!({ "user_id": "", "original_url": "https://example.com" })),
        Some(json!({})),
        None,
    ];

    for payload in payloads {
        let mut req = test::TestRequest::post().uri("/api/generate-link");
        if let Some(p) = &payload {
            req = req.set_json(p);
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {:?}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "User ID and URL required" }));
    }

    assert_eq!(ctx.storage.count_links().await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_generate_link_for_unregistered_owner() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/generate-link")
        .set_json(json!({ "user_id": "never-registered", "original_url": "https://x.example" }))
        .to_request();
    let generated: Value = test::call_and_read_body_json(&app, req).await;
    let code = generated["short_code"].as_str().unwrap().to_string();

    // listed under the raw user_id
    let req = test::TestRequest::get()
        .uri("/api/user-links/never-registered")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["links"].as_array().unwrap().len(), 1);

    // but not resolvable without a matching user
    let req = test::TestRequest::get()
        .uri(&format!("/api/link-info/{}", code))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// GET /api/user-links/{user_id}
// =============================================================================

#[actix_rt::test]
async fn test_user_links_newest_first() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let mut ids = Vec::new();
    for i in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/generate-link")
            .set_json(json!({ "user_id": "owner", "original_url": format!("https://example.com/{}", i) }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["link_id"].as_i64().unwrap());
    }

    let req = test::TestRequest::get()
        .uri("/api/user-links/owner")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let links = body["links"].as_array().unwrap();

    assert_eq!(links.len(), 3);
    let listed: Vec<i64> = links.iter().map(|l| l["id"].as_i64().unwrap()).collect();
    ids.reverse();
    assert_eq!(listed, ids);

    let newest = &links[0];
    assert_eq!(newest["user_id"], json!("owner"));
    assert_eq!(newest["link"], json!("https://example.com/2"));
    assert!(newest["short_code"].is_string());
    assert!(newest["created_at"].is_string());
}

#[actix_rt::test]
async fn test_user_links_unknown_owner_is_empty() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/user-links/nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "links": [] }));
}

// =============================================================================
// GET /api/link-info/{short_code}
// =============================================================================

#[actix_rt::test]
async fn test_link_info_unknown_code() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/link-info/zzzzzz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Link not found" }));
}

#[actix_rt::test]
async fn test_full_identity_to_lookup_flow() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post().uri("/api/get-user-id").to_request();
    let identity: Value = test::call_and_read_body_json(&app, req).await;
    let personal_id = identity["personal_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/generate-link")
        .set_json(json!({ "user_id": personal_id, "original_url": "https://example.com" }))
        .to_request();
    let generated: Value = test::call_and_read_body_json(&app, req).await;
    let code = generated["short_code"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/link-info/{}", code))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let info: Value = test::read_body_json(resp).await;
    let link = &info["link"];
    assert_eq!(link["link"], json!("https://example.com"));
    assert_eq!(link["user_id"], json!(personal_id));
    assert_eq!(link["personal_id"], json!(personal_id));
    assert_eq!(link["short_code"], json!(code));
    assert_eq!(link["id"], generated["link_id"]);
}

// =============================================================================
// Store failures and health
// =============================================================================

#[actix_rt::test]
async fn test_store_failure_returns_raw_message() {
    let ctx = context().await;
    let app = test_app!(ctx);

    ctx.storage
        .get_db()
        .execute_unprepared("DROP TABLE links")
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/user-links/owner")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("no such table"));
}

#[actix_rt::test]
async fn test_collision_exhaustion_is_server_error() {
    let (storage, _dir) = create_temp_storage().await;
    let identity = Arc::new(IdentityService::new(storage.clone()));
    let links = Arc::new(LinkService::with_generator(
        storage.clone(),
        &links_config(2),
        ScriptedCodes::new(&["same00", "same00", "same00"]),
    ));
    let ctx = TestContext {
        storage,
        identity,
        links,
        _dir,
    };
    let app = test_app!(ctx);

    let payload = json!({ "user_id": "owner", "original_url": "https://example.com" });
    let req = test::TestRequest::post()
        .uri("/api/generate-link")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/generate-link")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("UNIQUE"));
}

#[actix_rt::test]
async fn test_health_reports_counts() {
    let ctx = context().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post().uri("/api/get-user-id").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["users"], json!(1));
    assert_eq!(body["links"], json!(0));

    let req = test::TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
