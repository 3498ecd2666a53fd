use crate::storage::{Link, LinkWithOwner, NewLink, User};
use migration::entities::{link, user};

/// 将 user Model 转换为 User
pub fn model_to_user(model: user::Model) -> User {
    User {
        id: model.id,
        personal_id: model.personal_id,
        created_at: model.created_at,
    }
}

/// 将 link Model 转换为 Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        user_id: model.user_id,
        original_url: model.link,
        short_code: model.short_code,
        created_at: model.created_at,
    }
}

/// 合并 link 与其所属 user
pub fn models_to_link_with_owner(link: link::Model, owner: user::Model) -> LinkWithOwner {
    LinkWithOwner {
        link: model_to_link(link),
        personal_id: owner.personal_id,
    }
}

/// 将 NewLink 转换为 ActiveModel（id 由数据库分配）
pub fn new_link_to_active_model(
    new_link: &NewLink,
    created_at: chrono::DateTime<chrono::Utc>,
) -> link::ActiveModel {
    use sea_orm::ActiveValue::*;

    link::ActiveModel {
        id: NotSet,
        user_id: Set(new_link.user_id.clone()),
        link: Set(new_link.original_url.clone()),
        short_code: Set(new_link.short_code.clone()),
        created_at: Set(created_at),
    }
}
