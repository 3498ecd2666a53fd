pub mod identity_service;
pub mod link_service;

pub use identity_service::{IdentityResolution, IdentityService};
pub use link_service::{
    GenerateLinkRequest, GeneratedLink, LINK_NOT_FOUND_MESSAGE, LinkService,
    MISSING_FIELDS_MESSAGE,
};
