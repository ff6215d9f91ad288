//! opsdash-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROBLEM_BASE: &str = "https://opsdash.dev/problems";

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// 输入表格无法解析（缺列、日期格式错误、数值非法）
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// 生产与物流数据的日期区间没有交集
    #[error("No overlapping date range: {0}")]
    NoOverlappingDateRange(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn data_format(msg: impl Into<String>) -> Self {
        Self::DataFormat(msg.into())
    }

    pub fn no_overlapping_date_range(msg: impl Into<String>) -> Self {
        Self::NoOverlappingDateRange(msg.into())
    }

    pub fn payload_too_large(msg: impl Into<String>) -> Self {
        Self::PayloadTooLarge(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::DataFormat(_) => 422,
            Self::NoOverlappingDateRange(_) => 422,
            Self::PayloadTooLarge(_) => 413,
            Self::Internal(_) => 500,
        }
    }

    /// 用于 metrics 标签的短名称
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DataFormat(_) => "data_format",
            Self::NoOverlappingDateRange(_) => "no_overlapping_date_range",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Internal(_) => "internal",
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code(),
            detail: self.to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        let slug = match self {
            Self::Validation(_) => "validation",
            Self::DataFormat(_) => "data-format",
            Self::NoOverlappingDateRange(_) => "no-overlapping-date-range",
            Self::PayloadTooLarge(_) => "payload-too-large",
            Self::Internal(_) => "internal",
        };
        format!("{PROBLEM_BASE}/{slug}")
    }

    fn problem_title(&self) -> String {
        match self {
            Self::Validation(_) => "Validation Error",
            Self::DataFormat(_) => "Data Format Error",
            Self::NoOverlappingDateRange(_) => "No Overlapping Date Range",
            Self::PayloadTooLarge(_) => "Payload Too Large",
            Self::Internal(_) => "Internal Server Error",
        }
        .to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = self.to_problem_details();
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(problem)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::validation("bad").status_code(), 400);
        assert_eq!(AppError::data_format("bad date").status_code(), 422);
        assert_eq!(AppError::no_overlapping_date_range("x").status_code(), 422);
        assert_eq!(AppError::payload_too_large("x").status_code(), 413);
        assert_eq!(AppError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_problem_details() {
        let problem = AppError::no_overlapping_date_range("production ends before logistics starts")
            .to_problem_details();
        assert_eq!(problem.status, 422);
        assert_eq!(problem.title, "No Overlapping Date Range");
        assert!(problem.r#type.ends_with("/no-overlapping-date-range"));
        assert!(problem.detail.contains("production ends before logistics starts"));
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            AppError::validation("x").kind(),
            AppError::data_format("x").kind(),
            AppError::no_overlapping_date_range("x").kind(),
            AppError::payload_too_large("x").kind(),
            AppError::internal("x").kind(),
        ];
        for (i, kind) in kinds.iter().enumerate() {
            assert!(!kinds[i + 1..].contains(kind));
        }
        assert_eq!(AppError::internal("x").to_problem_details().title, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_into_response_uses_problem_json() {
        let response = AppError::data_format("missing column `sku`").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }
}
