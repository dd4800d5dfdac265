// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

use crate::domain::models::extraction::ExtractedRecord;

/// 将提取记录序列化为两行CSV：表头行为字段名，数据行为字段值
///
/// 字段顺序保持记录的插入顺序。数组值以 "; " 连接，
/// 其他非字符串值按其JSON文本输出。
pub fn record_to_csv(record: &ExtractedRecord) -> String {
    let header: Vec<String> = record.keys().map(|k| escape_field(k)).collect();
    let row: Vec<String> = record
        .values()
        .map(|v| escape_field(&value_to_text(v)))
        .collect();
    format!("{}\r\n{}\r\n", header.join(","), row.join(","))
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

/// RFC 4180 风格转义：包含分隔符、引号或换行的字段加引号，内部引号加倍
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
