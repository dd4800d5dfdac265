// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::domain::services::pipeline::ExtractionPipeline;
use crate::presentation::errors::AppError;
use crate::utils::csv::record_to_csv;

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

/// 按键返回已存储的提取记录
pub async fn get_result(
    Extension(pipeline): Extension<Arc<ExtractionPipeline>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match pipeline.fetch_stored(&key).await? {
        Some(record) => Ok(Json(json!({ "key": key, "data": record })).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no result stored under this key" })),
        )
            .into_response()),
    }
}

/// 把已存储的记录导出为CSV或JSON下载
pub async fn export_result(
    Extension(pipeline): Extension<Arc<ExtractionPipeline>>,
    Path(key): Path<String>,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, AppError> {
    let record = match pipeline.fetch_stored(&key).await? {
        Some(record) => record,
        None => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "no result stored under this key" })),
            )
                .into_response())
        }
    };

    match params.format.as_deref().unwrap_or("csv") {
        "json" => Ok((
            [(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.json\"", key),
            )],
            Json(record),
        )
            .into_response()),
        "csv" => Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}.csv\"", key),
                ),
            ],
            record_to_csv(&record),
        )
            .into_response()),
        other => Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("unsupported export format: {}", other) })),
        )
            .into_response()),
    }
}
