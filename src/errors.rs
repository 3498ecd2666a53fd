use std::fmt;

use actix_web::http::StatusCode;
use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone)]
pub enum LinkgenError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    UniqueViolation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
}

impl LinkgenError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkgenError::DatabaseConfig(_) => "E001",
            LinkgenError::DatabaseConnection(_) => "E002",
            LinkgenError::DatabaseOperation(_) => "E003",
            LinkgenError::UniqueViolation(_) => "E004",
            LinkgenError::FileOperation(_) => "E005",
            LinkgenError::Validation(_) => "E006",
            LinkgenError::NotFound(_) => "E007",
            LinkgenError::Serialization(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkgenError::DatabaseConfig(_) => "Database Configuration Error",
            LinkgenError::DatabaseConnection(_) => "Database Connection Error",
            LinkgenError::DatabaseOperation(_) => "Database Operation Error",
            LinkgenError::UniqueViolation(_) => "Unique Constraint Violation",
            LinkgenError::FileOperation(_) => "File Operation Error",
            LinkgenError::Validation(_) => "Validation Error",
            LinkgenError::NotFound(_) => "Resource Not Found",
            LinkgenError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkgenError::DatabaseConfig(msg) => msg,
            LinkgenError::DatabaseConnection(msg) => msg,
            LinkgenError::DatabaseOperation(msg) => msg,
            LinkgenError::UniqueViolation(msg) => msg,
            LinkgenError::FileOperation(msg) => msg,
            LinkgenError::Validation(msg) => msg,
            LinkgenError::NotFound(msg) => msg,
            LinkgenError::Serialization(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    ///
    /// Store failures of every kind (constraint violations included) are 500.
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinkgenError::Validation(_) | LinkgenError::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            LinkgenError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkgenError {}

// 便捷的构造函数
impl LinkgenError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkgenError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkgenError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkgenError::DatabaseOperation(msg.into())
    }

    pub fn unique_violation<T: Into<String>>(msg: T) -> Self {
        LinkgenError::UniqueViolation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkgenError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkgenError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkgenError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkgenError::Serialization(msg.into())
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, LinkgenError::UniqueViolation(_))
    }
}

impl From<DbErr> for LinkgenError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                LinkgenError::UniqueViolation(err.to_string())
            }
            _ => LinkgenError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for LinkgenError {
    fn from(err: std::io::Error) -> Self {
        LinkgenError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkgenError {
    fn from(err: serde_json::Error) -> Self {
        LinkgenError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkgenError>;
