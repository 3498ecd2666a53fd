//! SeaORM storage backend
//!
//! SQLite-only store for users and links. `SeaOrmStorage` is constructed
//! once at startup and shared by every request handler.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::config::DatabaseConfig;
use crate::errors::{LinkgenError, Result};
use crate::storage::models::StorageConfig;

pub use connection::{connect_sqlite, run_migrations};
pub use converters::{model_to_link, model_to_user, models_to_link_with_owner};

/// 规范化 SQLite URL
///
/// Accepts `sqlite://...`, `sqlite:...`, `:memory:` or a bare file path.
pub fn normalize_sqlite_url(database_url: &str) -> Result<String> {
    let trimmed = database_url.trim();
    if trimmed.is_empty() {
        return Err(LinkgenError::database_config("database_url 未设置"));
    }

    if trimmed.starts_with("mysql://")
        || trimmed.starts_with("mariadb://")
        || trimmed.starts_with("postgres://")
        || trimmed.starts_with("postgresql://")
    {
        return Err(LinkgenError::database_config(format!(
            "不支持的数据库 URL: {}. 仅支持 SQLite (sqlite://, 文件路径, :memory:)",
            trimmed
        )));
    }

    if trimmed.starts_with("sqlite:") {
        Ok(trimmed.to_string())
    } else if trimmed == ":memory:" {
        Ok("sqlite::memory:".to_string())
    } else {
        Ok(format!("sqlite://{}", trimmed))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    database_url: String,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_url = normalize_sqlite_url(&config.database_url)?;
        let db = connect_sqlite(&database_url, config.pool_size).await?;

        let storage = SeaOrmStorage { db, database_url };

        run_migrations(&storage.db).await?;

        warn!("SQLITE Storage initialized.");
        Ok(storage)
    }

    pub fn get_backend_config(&self) -> StorageConfig {
        StorageConfig {
            storage_type: "sqlite".to_string(),
            database_url: self.database_url.clone(),
        }
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
