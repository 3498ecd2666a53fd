use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, trace};

use crate::storage::SeaOrmStorage;

use super::helpers::json_response;
use super::types::HealthResponse;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Health Service
///
/// 直接调用 storage 的计数方法，不经过业务 service。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        storage: web::Data<Arc<SeaOrmStorage>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let counts = tokio::time::timeout(Duration::from_secs(5), async {
            let users = storage.count_users().await?;
            let links = storage.count_links().await?;
            Ok::<_, crate::errors::LinkgenError>((users, links))
        })
        .await;

        let (storage_status, users, links) = match counts {
            Ok(Ok((users, links))) => ("healthy".to_string(), Some(users), Some(links)),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                (format!("database error: {}", e.message()), None, None)
            }
            Err(_) => {
                error!("Storage health check timeout");
                ("timeout".to_string(), None, None)
            }
        };

        let is_healthy = users.is_some();
        let uptime = (chrono::Utc::now() - app_start_time.start_datetime)
            .num_seconds()
            .max(0) as u64;

        let body = HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            storage: storage_status,
            users,
            links,
            uptime,
            response_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Health check completed in {:?}, status: {}",
            start_time.elapsed(),
            body.status
        );

        let status = if is_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        json_response(status, &body)
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
