//! Command-line interface definitions using clap
//!
//! Without a subcommand the binary starts the HTTP server.

use clap::{Parser, Subcommand};

/// linkgen - link generation and tracking service
#[derive(Parser)]
#[command(name = "linkgen")]
#[command(version)]
#[command(about = "Link generation and tracking service", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Create a new anonymous identity, or confirm an existing one
    Identity {
        /// Existing personal id to look up
        personal_id: Option<String>,
    },

    /// Generate a link for an owner
    Generate {
        /// Owner personal id
        user_id: String,

        /// Original destination URL
        original_url: String,
    },

    /// List an owner's links, newest first
    List {
        /// Owner personal id
        user_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a link by short code
    Info {
        /// Short code
        short_code: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}
