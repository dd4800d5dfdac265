// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 选择器无匹配时记录的占位值
pub const NOT_FOUND: &str = "Not found";

/// 字段映射：选择器 -> 提取到的文本（或占位值）
///
/// serde_json 启用了 preserve_order，迭代顺序即插入顺序（选择器顺序）
pub type FieldMap = Map<String, Value>;

/// 提取记录：字段名 -> 标量值，管道的规范输出单元
pub type ExtractedRecord = Map<String, Value>;

/// 提取模式
///
/// 两种调用形态统一为同一条管道的配置项，而不是两份重复逻辑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// 本地用选择器提取字段，模型只负责把提取结果重新格式化
    #[default]
    Direct,
    /// 把页面文本和字段名交给模型，由模型完成提取
    ModelDriven,
}

/// 一次提取请求
///
/// 不变量：`url` 与 `selectors` 非空，由HTTP层在进入管道前校验
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// 目标URL，必须是语法合法的绝对URL
    pub url: String,
    /// 选择器列表，顺序决定输出字段顺序
    pub selectors: Vec<String>,
    /// 模型标识，缺省时使用配置的默认模型
    pub model: Option<String>,
    /// 提取模式
    #[serde(default)]
    pub mode: ExtractionMode,
}

/// 渲染后的页面
///
/// 每次请求创建一份，创建后不可变；`text` 已清理并截断到配置的字符预算
#[derive(Debug, Clone)]
pub struct RawPage {
    /// 来源URL
    pub source_url: String,
    /// 渲染后的完整HTML，供本地选择器提取使用
    pub html: String,
    /// 清理并截断后的可见文本
    pub text: String,
}

/// 管道执行结果
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    /// 存储键（时间戳派生）
    pub key: String,
    /// 规范化后的提取记录
    pub record: ExtractedRecord,
}
