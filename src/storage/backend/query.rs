//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::{debug, error, trace};

use super::SeaOrmStorage;
use super::converters::{model_to_link, model_to_user, models_to_link_with_owner};
use crate::errors::Result;
use crate::storage::{Link, LinkWithOwner, User};

use migration::entities::{link, user};

impl SeaOrmStorage {
    /// 按 personal_id 查找用户
    pub async fn find_user(&self, personal_id: &str) -> Result<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::PersonalId.eq(personal_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("查询用户失败: {}", e);
                e
            })?;

        Ok(model.map(model_to_user))
    }

    /// 列出某个 owner 的所有链接，最新的在前
    ///
    /// Unknown owners simply yield an empty list.
    pub async fn links_by_owner(&self, user_id: &str) -> Result<Vec<Link>> {
        let models = link::Entity::find()
            .filter(link::Column::UserId.eq(user_id))
            .order_by_desc(link::Column::CreatedAt)
            .order_by_desc(link::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("查询用户链接失败: {}", e);
                e
            })?;

        trace!("Loaded {} links for owner {}", models.len(), user_id);
        Ok(models.into_iter().map(model_to_link).collect())
    }

    /// 按短码查找链接并关联其 owner
    ///
    /// Inner-join semantics: a link whose owner is not a registered user is
    /// reported as absent.
    pub async fn link_with_owner(&self, short_code: &str) -> Result<Option<LinkWithOwner>> {
        let row = link::Entity::find()
            .filter(link::Column::ShortCode.eq(short_code))
            .find_also_related(user::Entity)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("查询短码失败: {}", e);
                e
            })?;

        match row {
            Some((link, Some(owner))) => Ok(Some(models_to_link_with_owner(link, owner))),
            Some((link, None)) => {
                debug!(
                    "Link {} references unregistered owner {}",
                    link.short_code, link.user_id
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub async fn count_users(&self) -> Result<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }

    pub async fn count_links(&self) -> Result<u64> {
        Ok(link::Entity::find().count(&self.db).await?)
    }
}
