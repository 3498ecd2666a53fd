//! linkgen - link generation and tracking service
//!
//! Clients obtain a persistent anonymous identity, generate short-coded
//! redirect links tied to it, list the links they created and resolve a
//! short code back to its target.
//!
//! # Architecture
//! - `api`: HTTP handlers and middleware
//! - `services`: identity and link business logic
//! - `storage`: SQLite persistence through SeaORM
//! - `config`: static configuration (TOML + environment)
//! - `interfaces`: command-line interface
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging setup
//! - `utils`: short code generation

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
