//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations. Each one is a
//! single INSERT; uniqueness is left to the table constraints.

use chrono::Utc;
use sea_orm::{ActiveValue::Set, EntityTrait};
use tracing::{error, info};

use super::SeaOrmStorage;
use super::converters::new_link_to_active_model;
use crate::errors::{LinkgenError, Result};
use crate::storage::{Link, NewLink, User};

use migration::entities::{link, user};

impl SeaOrmStorage {
    /// 插入新用户
    pub async fn insert_user(&self, personal_id: &str) -> Result<User> {
        let created_at = Utc::now();
        let active_model = user::ActiveModel {
            personal_id: Set(personal_id.to_string()),
            created_at: Set(created_at),
            ..Default::default()
        };

        let result = user::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("插入用户失败: {}", e);
                LinkgenError::from(e)
            })?;

        info!("User created: {}", personal_id);
        Ok(User {
            id: result.last_insert_id,
            personal_id: personal_id.to_string(),
            created_at,
        })
    }

    /// 插入新链接
    ///
    /// A duplicate short code fails with `LinkgenError::UniqueViolation`.
    pub async fn insert_link(&self, new_link: &NewLink) -> Result<Link> {
        let created_at = Utc::now();
        let active_model = new_link_to_active_model(new_link, created_at);

        let result = link::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(LinkgenError::from)?;

        info!(
            "Link created: {} (owner: {})",
            new_link.short_code, new_link.user_id
        );
        Ok(Link {
            id: result.last_insert_id,
            user_id: new_link.user_id.clone(),
            original_url: new_link.original_url.clone(),
            short_code: new_link.short_code.clone(),
            created_at,
        })
    }
}
