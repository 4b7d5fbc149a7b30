/// Uniform response envelope.
///
/// Every endpoint answers `{message, type, code, data?, errors?}` so clients
/// can dispatch on `type`/`code` without inspecting HTTP details.
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

pub fn success<T: Serialize>(code: StatusCode, message: &str, data: T) -> HttpResponse {
    HttpResponse::build(code).json(ApiResponse {
        message: message.to_string(),
        kind: "success".to_string(),
        code: code.as_u16(),
        data: serde_json::to_value(data).ok(),
        errors: None,
    })
}

/// Success with no payload (updates, deletes, logout).
pub fn message_only(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(ApiResponse {
        message: message.to_string(),
        kind: "success".to_string(),
        code: code.as_u16(),
        data: None,
        errors: None,
    })
}

pub fn error(code: StatusCode, message: &str, errors: Option<Value>) -> HttpResponse {
    HttpResponse::build(code).json(ApiResponse {
        message: message.to_string(),
        kind: "error".to_string(),
        code: code.as_u16(),
        data: None,
        errors,
    })
}
