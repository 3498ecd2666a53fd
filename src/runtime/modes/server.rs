//! Server mode
//!
//! Builds the actix application and serves it until the process is
//! interrupted.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::Result;
use tracing::warn;

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{AppStartTime, api_routes, health_routes};
use crate::config::{CorsConfig, get_config};
use crate::runtime::lifetime;

/// Largest accepted JSON body
const MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

/// Build CORS middleware from configuration
///
/// Enabled means any origin, method and header, as a public JSON API.
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    if !cors_config.enabled {
        return Cors::default();
    }

    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(["x-request-id"])
        .max_age(cors_config.max_age)
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let config = get_config();

    let startup = lifetime::startup::prepare_server_startup(&config)
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            e
        })?;

    let storage = startup.storage.clone();
    let identity_service = startup.identity_service.clone();
    let link_service = startup.link_service.clone();
    let cors_config = config.cors.clone();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    if !cors_config.enabled {
        warn!("CORS disabled: browsers will only reach the API from the same origin");
    }

    let db_for_shutdown = storage.get_db().clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(identity_service.clone()))
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
            .service(api_routes())
            .service(health_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Link Generator Server running on http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&db_for_shutdown) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
