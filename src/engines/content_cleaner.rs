// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

/// 不可见或非文本节点：在文本提取前整体剥离，降低下游载荷和噪声
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("script regex"));
static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").expect("style regex"));
static HTML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));
static META_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<meta\b[^>]*>").expect("meta regex"));
static LINK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<link\b[^>]*>").expect("link regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// 把渲染后的HTML缩减为有界的可见正文文本
///
/// 步骤：剥离 script/style/meta/link/注释节点，取body的文本，
/// 折叠空白，按字符预算截断
pub fn clean_page_text(html: &str, max_chars: usize) -> String {
    let stripped = SCRIPT_BLOCK.replace_all(html, " ");
    let stripped = STYLE_BLOCK.replace_all(&stripped, " ");
    let stripped = HTML_COMMENT.replace_all(&stripped, " ");
    let stripped = META_TAG.replace_all(&stripped, " ");
    let stripped = LINK_TAG.replace_all(&stripped, " ");

    let document = Html::parse_document(&stripped);
    let body_selector = Selector::parse("body").expect("body selector");
    let raw_text = match document.select(&body_selector).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        None => String::new(),
    };

    let collapsed = WHITESPACE.replace_all(raw_text.trim(), " ");
    truncate_chars(&collapsed, max_chars)
}

/// 按字符数截断，避免在多字节字符中间切断
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
