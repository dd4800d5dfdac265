// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::domain::models::extraction::ExtractedRecord;
use crate::utils::errors::PipelineError;

/// 裸键修复模式：`{` 或 `,` 后紧跟的裸标识符键加引号
static BARE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([{,]\s*)(\w+)\s*:"#).expect("bare key regex is valid"));

/// 响应规范化服务
///
/// 推理端点只保证返回"近似JSON"的花括号文本块，键可能是未加引号的
/// 裸标识符。本服务做保守的正则修复后按严格JSON解析。
///
/// 已知局限（刻意保留为启发式，不做完整语法解析）：
/// 字符串值内部形如 `{key:` 或 `, key:` 的片段会被误修复；
/// 尾逗号、单引号键、嵌套裸键对象之外的其他畸形不被修复。
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// 将模型回复修复并解析为提取记录
    ///
    /// 对已经合法的JSON对象幂等。修复后仍解析失败或顶层不是对象时
    /// 返回 `ParseError`，调用方得不到任何部分记录。
    pub fn normalize(reply: &str) -> Result<ExtractedRecord, PipelineError> {
        let trimmed = reply.trim();
        let repaired = BARE_KEY.replace_all(trimmed, "$1\"$2\":");

        match serde_json::from_str::<Value>(&repaired) {
            Ok(Value::Object(record)) => Ok(record),
            Ok(_) | Err(_) => Err(PipelineError::Parse(
                "model response not valid structured data".to_string(),
            )),
        }
    }
}
