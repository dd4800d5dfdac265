// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::domain::models::extraction::{FieldMap, NOT_FOUND};

/// 字段提取服务
///
/// 对渲染后的文档按调用方给定顺序逐个求值CSS选择器，
/// 每个选择器取第一个匹配元素的文本
pub struct FieldExtractor;

impl FieldExtractor {
    /// 提取字段
    ///
    /// 无匹配或选择器本身非法时记录占位值 `"Not found"`，
    /// 单个坏选择器不会中止其余选择器的提取。
    /// 选择器语法校验完全交给查询引擎。
    pub fn extract(html: &str, selectors: &[String]) -> FieldMap {
        let document = Html::parse_document(html);
        let mut fields = FieldMap::new();

        for selector_str in selectors {
            let value = match Selector::parse(selector_str) {
                Ok(selector) => document
                    .select(&selector)
                    .next()
                    .map(|element| {
                        element
                            .text()
                            .collect::<Vec<_>>()
                            .join(" ")
                            .trim()
                            .to_string()
                    })
                    .filter(|text| !text.is_empty()),
                Err(_) => None,
            };

            fields.insert(
                selector_str.clone(),
                Value::String(value.unwrap_or_else(|| NOT_FOUND.to_string())),
            );
        }

        fields
    }
}
