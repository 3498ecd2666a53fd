//! CLI interface module
//!
//! Direct-to-database commands that reuse the same services as the HTTP
//! handlers.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::services::{IdentityService, LinkService};
use crate::storage::{SeaOrmStorage, StorageFactory};
use commands::{config_generate, config_show, generate_link, link_info, list_links, resolve_identity};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::LinkgenError> for CliError {
    fn from(err: crate::errors::LinkgenError) -> Self {
        match err {
            crate::errors::LinkgenError::Validation(msg)
            | crate::errors::LinkgenError::NotFound(msg) => CliError::CommandError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

async fn open_storage() -> Result<Arc<SeaOrmStorage>, CliError> {
    StorageFactory::create(&get_config().database)
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        // Config commands don't need a DB connection
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force).await
            }
            ConfigCommands::Show => config_show(),
        },
        Commands::Serve => Err(CliError::ParseError(
            "serve is handled by the server runtime".to_string(),
        )),
        other => run_storage_command(other).await,
    }
}

async fn run_storage_command(cmd: Commands) -> Result<(), CliError> {
    let storage = open_storage().await?;
    let config = get_config();

    match cmd {
        Commands::Identity { personal_id } => {
            resolve_identity(&IdentityService::new(storage), personal_id).await
        }
        Commands::Generate {
            user_id,
            original_url,
        } => {
            let service = LinkService::new(storage, &config.links);
            generate_link(&service, user_id, original_url).await
        }
        Commands::List { user_id, json } => {
            let service = LinkService::new(storage, &config.links);
            list_links(&service, &user_id, json).await
        }
        Commands::Info { short_code, json } => {
            let service = LinkService::new(storage, &config.links);
            link_info(&service, &short_code, json).await
        }
        Commands::Serve | Commands::Config { .. } => Err(CliError::ParseError(
            "command does not use the database".to_string(),
        )),
    }
}
