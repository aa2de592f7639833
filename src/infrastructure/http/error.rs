//! HTTP Error Handling
//!
//! 错误响应统一为 `{"error": "..."}`。上游与存储失败只返回通用信息，细节仅记录在日志中。

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 400，message 原样返回
    BadRequest(String),
    /// 500，只返回 message，detail 仅记录日志
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// 将应用层错误映射为 HTTP 错误
    ///
    /// `failure_message` 为该接口的通用失败信息
    pub fn from_application(err: ApplicationError, failure_message: &str) -> Self {
        match err {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            other => ApiError::internal(failure_message, other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Internal { message, detail } => {
                tracing::error!(error = %message, detail = %detail, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
