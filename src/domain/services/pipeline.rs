// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::models::extraction::{
    ExtractedRecord, ExtractionMode, ExtractionRequest, PipelineOutcome,
};
use crate::domain::repositories::result_store::ResultStore;
use crate::domain::services::field_extractor::FieldExtractor;
use crate::domain::services::inference_service::InferenceService;
use crate::domain::services::normalizer::ResponseNormalizer;
use crate::engines::traits::PageFetcher;
use crate::utils::errors::PipelineError;

/// 原始页面文本的存储键后缀
const RAW_KEY_SUFFIX: &str = "-raw";

/// 提取管道
///
/// 编排一次提取请求的完整执行：
/// 健康检查 → 获取页面 → 提取或委托模型 → 规范化 → 存储原始文本 →
/// 存储格式化记录。线性状态机，首个错误即失败，无重试，
/// 已完成的存储写入不回滚。
///
/// 所有协作者通过构造函数注入，管道自身不持有可变状态，
/// 多个请求可以并发执行各自的管道实例调用。
pub struct ExtractionPipeline {
    fetcher: Arc<dyn PageFetcher>,
    inference: Arc<dyn InferenceService>,
    store: Arc<dyn ResultStore>,
    default_model: String,
}

impl ExtractionPipeline {
    /// 创建新的提取管道实例
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        inference: Arc<dyn InferenceService>,
        store: Arc<dyn ResultStore>,
        default_model: String,
    ) -> Self {
        Self {
            fetcher,
            inference,
            store,
            default_model,
        }
    }

    /// 执行一次提取请求
    ///
    /// 调用前提：`request.url` 与 `request.selectors` 非空（由HTTP层校验）。
    /// 语法非法的URL由渲染引擎拒绝，表现为 `FetchError`。
    pub async fn run(&self, request: ExtractionRequest) -> Result<PipelineOutcome, PipelineError> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        // 端点不可达对整个请求是致命的，没有备用端点
        if !self.inference.health_check().await {
            return Err(PipelineError::InferenceUnavailable(
                "health check failed".to_string(),
            ));
        }

        info!(url = %request.url, mode = ?request.mode, "starting extraction");
        let page = self.fetcher.fetch(&request.url).await?;
        debug!(chars = page.text.chars().count(), "page fetched");

        let reply = match request.mode {
            ExtractionMode::Direct => {
                // 本地提取字段，模型只负责重新格式化已提取的数据
                let fields = FieldExtractor::extract(&page.html, &request.selectors);
                let serialized = serde_json::to_string(&fields)
                    .map_err(|e| PipelineError::Parse(e.to_string()))?;
                self.inference
                    .query(&serialized, &request.selectors, &model)
                    .await?
            }
            ExtractionMode::ModelDriven => {
                // 把截断后的页面文本和字段名都交给模型
                self.inference
                    .query(&page.text, &request.selectors, &model)
                    .await?
            }
        };

        let record = ResponseNormalizer::normalize(&reply)?;

        let key = generate_key();
        self.store
            .put(&format!("{}{}", key, RAW_KEY_SUFFIX), &page.text)
            .await?;
        // Value映射的序列化在实践中不会失败，这个分支不可达；
        // 归到规范化阶段而不是存储阶段
        let serialized_record = serde_json::to_string(&record)
            .map_err(|e| PipelineError::Parse(e.to_string()))?;
        self.store.put(&key, &serialized_record).await?;
        info!(%key, "extraction stored");

        Ok(PipelineOutcome { key, record })
    }

    /// 按键检索已存储的格式化记录，键不存在时返回None
    pub async fn fetch_stored(
        &self,
        key: &str,
    ) -> Result<Option<ExtractedRecord>, PipelineError> {
        match self.store.get(key).await? {
            Some(value) => serde_json::from_str::<ExtractedRecord>(&value)
                .map(Some)
                .map_err(|e| PipelineError::Store(format!("stored value not a record: {}", e))),
            None => Ok(None),
        }
    }
}

/// 生成时间戳派生的存储键
///
/// RFC3339 UTC时间戳中的 `:` 和 `.` 全部替换为 `-`，得到对存储安全的键
fn generate_key() -> String {
    Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}
