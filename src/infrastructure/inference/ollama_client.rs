// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::services::inference_service::InferenceService;
use crate::utils::errors::PipelineError;

/// 调用方未指定模型时使用的默认模型标识
pub const DEFAULT_MODEL: &str = "llama3.1";

/// Ollama桥接客户端
///
/// 通过HTTP POST与固定地址的本地推理端点交互，请求体为
/// `{ text, instruction, model }`，响应体为 `{ response }`。
/// 端点地址是单一配置项，不做端口扫描或发现。
pub struct OllamaClient {
    /// 推理端点URL
    endpoint: String,
    /// 单次调用的超时时间；本地推理可能以分钟计
    timeout: Duration,
    client: reqwest::Client,
}

impl OllamaClient {
    /// 创建新的Ollama客户端实例
    ///
    /// # 参数
    ///
    /// * `endpoint` - 推理端点URL
    /// * `timeout_secs` - 单次调用的超时时间（秒）
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            client: reqwest::Client::new(),
        }
    }

    async fn post(&self, body: &Value) -> Result<reqwest::Response, PipelineError> {
        self.client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PipelineError::Timeout(e.to_string())
                } else {
                    PipelineError::InferenceUnavailable(e.to_string())
                }
            })
    }
}

#[async_trait]
impl InferenceService for OllamaClient {
    /// 发送一次字段提取请求
    ///
    /// 超时是 `TimeoutError`，连接失败或非成功状态是
    /// `InferenceUnavailable`，都不做静默重试
    async fn query(
        &self,
        text: &str,
        selectors: &[String],
        model: &str,
    ) -> Result<String, PipelineError> {
        let body = json!({
            "text": text,
            "instruction": format!("Extract fields: {}", selectors.join(", ")),
            "model": model,
        });

        let response = self.post(&body).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::InferenceUnavailable(format!(
                "endpoint returned status {}",
                status
            )));
        }

        let reply: Value = response
            .json()
            .await
            .map_err(|e| PipelineError::InferenceUnavailable(e.to_string()))?;

        match reply.get("response").and_then(Value::as_str) {
            Some(text) => {
                debug!(len = text.len(), "inference reply received");
                Ok(text.to_string())
            }
            None => Err(PipelineError::InferenceUnavailable(
                "reply missing response field".to_string(),
            )),
        }
    }

    /// 用占位内容确认端点可达且返回HTTP成功状态
    async fn health_check(&self) -> bool {
        let body = json!({
            "text": "test",
            "instruction": "testing connection",
            "model": DEFAULT_MODEL,
        });

        match self.post(&body).await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "inference health check failed");
                false
            }
        }
    }
}
