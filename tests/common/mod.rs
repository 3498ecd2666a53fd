//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use linkgen::config::{DatabaseConfig, LinksConfig};
use linkgen::storage::SeaOrmStorage;
use linkgen::utils::CodeGenerator;

pub const REDIRECT_BASE: &str = "https://tiktok-login.example.com/auth?code=";

/// 创建临时 SQLite 数据库的存储实例
///
/// The TempDir must be kept alive for as long as the storage is used.
pub async fn create_temp_storage() -> (Arc<SeaOrmStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
        pool_size: 2,
    };

    let storage = SeaOrmStorage::new(&config)
        .await
        .expect("Failed to create storage");

    (Arc::new(storage), temp_dir)
}

pub fn links_config(max_code_attempts: u32) -> LinksConfig {
    LinksConfig {
        redirect_base: REDIRECT_BASE.to_string(),
        code_length: 6,
        max_code_attempts,
    }
}

/// Generator that hands out a fixed sequence of codes
pub struct ScriptedCodes {
    codes: Mutex<VecDeque<String>>,
    fallback: String,
}

impl ScriptedCodes {
    pub fn new(codes: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: "zzzzzz".to_string(),
        })
    }

    pub fn remaining(&self) -> usize {
        self.codes.lock().unwrap().len()
    }
}

impl CodeGenerator for ScriptedCodes {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
