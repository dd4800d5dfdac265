// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::utils::errors::PipelineError;

/// 结果存储特质
///
/// 定义原始页面文本和格式化记录的键值存取接口。
/// 键是不透明字符串；重复写入同一键静默覆盖，无过期、无淘汰。
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// 使用指定键保存字符串值，已存在的键被覆盖
    async fn put(&self, key: &str, value: &str) -> Result<(), PipelineError>;

    /// 根据键检索值，键不存在时返回None
    async fn get(&self, key: &str) -> Result<Option<String>, PipelineError>;
}
