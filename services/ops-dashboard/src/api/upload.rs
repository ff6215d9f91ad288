//! multipart 上传解析

use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use chrono::NaiveDate;
use opsdash_errors::{AppError, AppResult};
use tracing::debug;

use crate::application::{DashboardFilter, UploadedTables};
use crate::infrastructure::tables::parse_date;

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(err.body_text())
    } else {
        AppError::validation(err.body_text())
    }
}

fn date_field(name: &str, text: &str) -> AppResult<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    parse_date(text)
        .map(Some)
        .ok_or_else(|| AppError::validation(format!("field `{name}` is not a date: {text}")))
}

/// 读取文件字段 `production`/`logistics`/`inventory` 与文本字段 `start`/`end`
///
/// 空文件视为未上传
pub async fn read_upload(mut multipart: Multipart) -> AppResult<(UploadedTables, DashboardFilter)> {
    let mut upload = UploadedTables::default();
    let mut filter = DashboardFilter::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "production" | "logistics" | "inventory" => {
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.is_empty() {
                    continue;
                }
                let slot = match name.as_str() {
                    "production" => &mut upload.production,
                    "logistics" => &mut upload.logistics,
                    _ => &mut upload.inventory,
                };
                *slot = Some(bytes.to_vec());
            }
            "start" => {
                let text = field.text().await.map_err(multipart_error)?;
                filter.start = date_field(&name, &text)?;
            }
            "end" => {
                let text = field.text().await.map_err(multipart_error)?;
                filter.end = date_field(&name, &text)?;
            }
            _ => debug!(field = %name, "Ignoring unknown multipart field"),
        }
    }

    Ok((upload, filter))
}
