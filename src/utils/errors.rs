// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 提取管道错误类型
///
/// 封闭的错误枚举，每个变体对应管道的一个失败阶段。
/// 所有错误都是致命的：中止当前管道调用，不重试，不回滚已完成的存储写入。
#[derive(Error, Debug)]
pub enum PipelineError {
    /// 页面无法获取或渲染（网络错误、导航超时、渲染引擎崩溃）
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// 推理端点不可达或返回非成功状态
    #[error("inference endpoint unavailable: {0}")]
    InferenceUnavailable(String),

    /// 推理调用超过配置的截止时间
    #[error("inference call timed out: {0}")]
    Timeout(String),

    /// 模型回复无法修复为结构化数据
    #[error("parse failed: {0}")]
    Parse(String),

    /// 键值存储操作失败
    #[error("store operation failed: {0}")]
    Store(String),
}

impl PipelineError {
    /// 返回失败阶段的名称，用于日志和错误响应
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Fetch(_) => "fetch",
            PipelineError::InferenceUnavailable(_) => "inference",
            PipelineError::Timeout(_) => "inference",
            PipelineError::Parse(_) => "normalize",
            PipelineError::Store(_) => "store",
        }
    }
}
