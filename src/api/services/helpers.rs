//! API 帮助函数

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::errors::LinkgenError;

use super::types::ErrorResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建成功响应
pub fn success_response<T: Serialize>(body: &T) -> HttpResponse {
    json_response(StatusCode::OK, body)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response(
        status,
        &ErrorResponse {
            error: message.to_string(),
        },
    )
}

/// 从 LinkgenError 构建错误响应
///
/// The underlying message is returned verbatim, store errors included.
pub fn error_from_linkgen(err: &LinkgenError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("{} {}: {}", err.code(), err.error_type(), err.message());
    }
    error_response(status, err.message())
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T, U, F>(result: Result<T, LinkgenError>, shape: F) -> HttpResponse
where
    U: Serialize,
    F: FnOnce(T) -> U,
{
    match result {
        Ok(data) => success_response(&shape(data)),
        Err(e) => error_from_linkgen(&e),
    }
}

/// 解析可选 JSON 请求体
///
/// An empty body yields `T::default()`, mirroring a client that posts
/// nothing at all.
pub fn parse_optional_json<T>(body: &[u8]) -> Result<T, LinkgenError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| LinkgenError::validation(e.to_string()))
}
