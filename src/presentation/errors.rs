// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::utils::errors::PipelineError;

/// 应用错误类型
///
/// 封装管道错误并映射为HTTP失败响应；调用方永远不会收到
/// 部分或降级的结果
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        let (status, stage) = match self.0.downcast_ref::<PipelineError>() {
            Some(err @ PipelineError::Fetch(_)) => (StatusCode::BAD_GATEWAY, err.stage()),
            Some(err @ PipelineError::InferenceUnavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, err.stage())
            }
            Some(err @ PipelineError::Timeout(_)) => (StatusCode::GATEWAY_TIMEOUT, err.stage()),
            Some(err @ PipelineError::Parse(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.stage())
            }
            Some(err @ PipelineError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.stage())
            }
            None => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        let body = Json(json!({ "error": error_message, "stage": stage }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
