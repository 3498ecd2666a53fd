use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::IdentityService;

use super::helpers::{api_result, error_from_linkgen, parse_optional_json};
use super::types::{GetUserIdRequest, GetUserIdResponse};

/// `POST /api/get-user-id`
///
/// The body is optional; an absent, empty or unknown `personal_id` mints a
/// new identity.
pub async fn get_user_id(
    body: web::Bytes,
    identity: web::Data<Arc<IdentityService>>,
) -> impl Responder {
    let req: GetUserIdRequest = match parse_optional_json(&body) {
        Ok(req) => req,
        Err(e) => return error_from_linkgen(&e),
    };
    trace!(
        "Identity request (personal_id supplied: {})",
        req.personal_id.is_some()
    );

    api_result(identity.resolve(req.personal_id).await, |r| {
        GetUserIdResponse {
            personal_id: r.personal_id,
            is_new: r.is_new,
        }
    })
}
