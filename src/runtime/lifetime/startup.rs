use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::{IdentityService, LinkService};
use crate::storage::{SeaOrmStorage, StorageFactory};

/// Everything the HTTP server shares across workers
pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub identity_service: Arc<IdentityService>,
    pub link_service: Arc<LinkService>,
}

/// 准备服务器启动的上下文
///
/// Opens (and creates, if needed) the database, runs migrations and builds
/// the services injected into every request handler.
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!(
        "Using storage backend: {} ({})",
        storage.get_backend_config().storage_type,
        storage.get_backend_config().database_url
    );

    let identity_service = Arc::new(IdentityService::new(storage.clone()));
    let link_service = Arc::new(LinkService::new(storage.clone(), &config.links));
    debug!(
        "Link service ready (redirect base: {}, code length: {}, max attempts: {})",
        config.links.redirect_base, config.links.code_length, config.links.max_code_attempts
    );

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        identity_service,
        link_service,
    })
}
