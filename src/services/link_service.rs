//! Link management service
//!
//! Generation, owner listing and short-code resolution. Shared between the
//! HTTP handlers and the command-line interface.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::LinksConfig;
use crate::errors::{LinkgenError, Result};
use crate::storage::{Link, LinkWithOwner, NewLink, SeaOrmStorage};
use crate::utils::{CodeGenerator, RandomBase36, build_generated_link};

/// Message returned when a generation request lacks a field
pub const MISSING_FIELDS_MESSAGE: &str = "User ID and URL required";

/// Message returned when a short code does not resolve
pub const LINK_NOT_FOUND_MESSAGE: &str = "Link not found";

// ============ Request/Response DTOs ============

/// Request to generate a new link
#[derive(Debug, Clone, Default)]
pub struct GenerateLinkRequest {
    pub user_id: Option<String>,
    pub original_url: Option<String>,
}

/// Result of link generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLink {
    pub generated_link: String,
    pub short_code: String,
    pub link_id: i64,
}

// ============ LinkService Implementation ============

pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
    generator: Arc<dyn CodeGenerator>,
    redirect_base: String,
    max_code_attempts: u32,
}

impl LinkService {
    /// Create a LinkService using the random base-36 generator
    pub fn new(storage: Arc<SeaOrmStorage>, config: &LinksConfig) -> Self {
        Self::with_generator(
            storage,
            config,
            Arc::new(RandomBase36::new(config.code_length)),
        )
    }

    /// Create a LinkService with a custom code generator
    pub fn with_generator(
        storage: Arc<SeaOrmStorage>,
        config: &LinksConfig,
        generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            storage,
            generator,
            redirect_base: config.redirect_base.clone(),
            max_code_attempts: config.max_code_attempts.max(1),
        }
    }

    /// Generate and persist a new link for `user_id`
    ///
    /// Neither the owner's existence nor the URL's shape is checked. A short
    /// code collision is retried with a fresh code until
    /// `max_code_attempts` is exhausted; the last store error is returned.
    pub async fn generate(&self, req: GenerateLinkRequest) -> Result<GeneratedLink> {
        let (user_id, original_url) = match (
            req.user_id.filter(|s| !s.is_empty()),
            req.original_url.filter(|s| !s.is_empty()),
        ) {
            (Some(user_id), Some(original_url)) => (user_id, original_url),
            _ => return Err(LinkgenError::validation(MISSING_FIELDS_MESSAGE)),
        };

        let mut attempt = 1;
        loop {
            let new_link = NewLink {
                user_id: user_id.clone(),
                original_url: original_url.clone(),
                short_code: self.generator.generate(),
            };

            match self.storage.insert_link(&new_link).await {
                Ok(link) => {
                    info!(
                        "LinkService: generated '{}' for owner '{}'",
                        link.short_code, link.user_id
                    );
                    return Ok(GeneratedLink {
                        generated_link: build_generated_link(&self.redirect_base, &link.short_code),
                        short_code: link.short_code,
                        link_id: link.id,
                    });
                }
                Err(e) if e.is_unique_violation() && attempt < self.max_code_attempts => {
                    warn!(
                        "Short code collision on '{}' (attempt {}/{}), regenerating",
                        new_link.short_code, attempt, self.max_code_attempts
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// All links owned by `user_id`, newest first
    pub async fn list_for_owner(&self, user_id: &str) -> Result<Vec<Link>> {
        self.storage.links_by_owner(user_id).await
    }

    /// Resolve a short code to its link and owner
    pub async fn resolve(&self, short_code: &str) -> Result<LinkWithOwner> {
        self.storage
            .link_with_owner(short_code)
            .await?
            .ok_or_else(|| LinkgenError::not_found(LINK_NOT_FOUND_MESSAGE))
    }
}
