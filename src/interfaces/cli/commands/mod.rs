//! CLI command implementations

mod config_gen;
mod link_management;

pub use config_gen::{config_generate, config_show};
pub use link_management::{generate_link, link_info, list_links, resolve_identity};
