// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;
use url::Url;

use crate::domain::models::extraction::{ExtractionMode, ExtractionRequest};
use crate::domain::services::inference_service::InferenceService;
use crate::domain::services::pipeline::ExtractionPipeline;
use crate::presentation::errors::AppError;

/// 抓取请求载荷
///
/// `fields` 是逗号分隔的选择器列表，与原始表单输入保持一致
#[derive(Debug, Deserialize)]
pub struct ScrapeRequestDto {
    pub url: String,
    pub fields: String,
    pub model: Option<String>,
    #[serde(default)]
    pub mode: ExtractionMode,
}

/// 处理抓取请求
///
/// 校验载荷后把请求交给提取管道，返回生成的存储键和提取记录
pub async fn scrape(
    Extension(pipeline): Extension<Arc<ExtractionPipeline>>,
    Json(payload): Json<ScrapeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    // Validate the request before the pipeline runs
    if payload.url.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "url is required"
            })),
        )
            .into_response());
    }

    if Url::parse(payload.url.trim()).is_err() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "url must be a valid absolute URL"
            })),
        )
            .into_response());
    }

    let selectors: Vec<String> = payload
        .fields
        .split(',')
        .map(|field| field.trim().to_string())
        .filter(|field| !field.is_empty())
        .collect();

    if selectors.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "at least one field selector is required"
            })),
        )
            .into_response());
    }

    let request = ExtractionRequest {
        url: payload.url.trim().to_string(),
        selectors,
        model: payload.model,
        mode: payload.mode,
    };

    let outcome = pipeline.run(request).await.map_err(|e| {
        error!(stage = e.stage(), error = %e, "pipeline failed");
        e
    })?;

    Ok(Json(json!({
        "success": true,
        "key": outcome.key,
        "data": outcome.record,
    }))
    .into_response())
}

/// 存活探针：报告服务在线状态和推理端点可达性
pub async fn health(
    Extension(inference): Extension<Arc<dyn InferenceService>>,
) -> impl IntoResponse {
    let inference_reachable = inference.health_check().await;
    Json(json!({
        "status": "ok",
        "inference_reachable": inference_reachable,
    }))
}
