//! Identity resolution service
//!
//! Maps an optional client-held personal id onto a stored user, minting a
//! fresh UUID v4 identity whenever the supplied id is absent or unknown.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::Result;
use crate::storage::SeaOrmStorage;

/// Result of identity resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResolution {
    pub personal_id: String,
    pub is_new: bool,
}

pub struct IdentityService {
    storage: Arc<SeaOrmStorage>,
}

impl IdentityService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Return the existing identity for `personal_id`, or create a new one
    ///
    /// Empty strings count as absent. At most one user row is written.
    pub async fn resolve(&self, personal_id: Option<String>) -> Result<IdentityResolution> {
        if let Some(candidate) = personal_id.filter(|id| !id.is_empty()) {
            if let Some(user) = self.storage.find_user(&candidate).await? {
                debug!("Known identity: {}", user.personal_id);
                return Ok(IdentityResolution {
                    personal_id: user.personal_id,
                    is_new: false,
                });
            }
            debug!("Unknown identity supplied, minting a new one");
        }

        let new_id = Uuid::new_v4().to_string();
        let user = self.storage.insert_user(&new_id).await?;
        info!("Issued new identity: {}", user.personal_id);

        Ok(IdentityResolution {
            personal_id: user.personal_id,
            is_new: true,
        })
    }
}
