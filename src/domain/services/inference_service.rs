// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::utils::errors::PipelineError;

/// 推理服务特质
///
/// 定义与外部推理端点交互的抽象契约，具体HTTP实现由基础设施层提供
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// 发送一次字段提取请求，返回模型的原始文本回复
    ///
    /// `text` 是页面文本或已提取的字段数据，`selectors` 列出要提取的
    /// 字段名，`model` 是模型标识。每次请求只调用一次，不重试。
    async fn query(
        &self,
        text: &str,
        selectors: &[String],
        model: &str,
    ) -> Result<String, PipelineError>;

    /// 用占位内容探测端点是否可达且返回HTTP成功状态
    async fn health_check(&self) -> bool;
}
