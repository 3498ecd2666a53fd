use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::services::{GenerateLinkRequest, LinkService};

use super::helpers::{api_result, error_from_linkgen, parse_optional_json};
use super::types::{
    GenerateLinkBody, GenerateLinkResponse, LinkInfoResponse, UserLinksResponse,
};

/// `POST /api/generate-link`
pub async fn generate_link(
    body: web::Bytes,
    links: web::Data<Arc<LinkService>>,
) -> impl Responder {
    let body: GenerateLinkBody = match parse_optional_json(&body) {
        Ok(body) => body,
        Err(e) => return error_from_linkgen(&e),
    };

    let req = GenerateLinkRequest {
        user_id: body.user_id,
        original_url: body.original_url,
    };

    api_result(links.generate(req).await, |generated| GenerateLinkResponse {
        success: true,
        generated_link: generated.generated_link,
        short_code: generated.short_code,
        link_id: generated.link_id,
    })
}

/// `GET /api/user-links/{user_id}`
pub async fn user_links(
    path: web::Path<String>,
    links: web::Data<Arc<LinkService>>,
) -> impl Responder {
    let user_id = path.into_inner();
    trace!("Listing links for owner {}", user_id);

    api_result(links.list_for_owner(&user_id).await, |links| {
        UserLinksResponse { links }
    })
}

/// `GET /api/link-info/{short_code}`
pub async fn link_info(
    path: web::Path<String>,
    links: web::Data<Arc<LinkService>>,
) -> impl Responder {
    let short_code = path.into_inner();
    debug!("Resolving short code {}", short_code);

    api_result(links.resolve(&short_code).await, |link| LinkInfoResponse {
        link,
    })
}
