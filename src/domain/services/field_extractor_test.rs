// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction::NOT_FOUND;
use crate::domain::services::field_extractor::FieldExtractor;

const HTML: &str = r#"
    <html>
        <body>
            <h1 id="main-title">Hello World</h1>
            <div class="content">
                <p>Paragraph 1</p>
                <p>Paragraph 2</p>
            </div>
        </body>
    </html>
"#;

#[test]
fn test_extract_first_match_per_selector() {
    let selectors = vec!["h1#main-title".to_string(), "div.content p".to_string()];
    let fields = FieldExtractor::extract(HTML, &selectors);

    assert_eq!(fields["h1#main-title"], "Hello World");
    // 多个匹配时只取第一个
    assert_eq!(fields["div.content p"], "Paragraph 1");
}

#[test]
fn test_missing_selector_records_sentinel_without_aborting_others() {
    let selectors = vec![
        "h1#main-title".to_string(),
        "div.missing".to_string(),
        "div.content p".to_string(),
    ];
    let fields = FieldExtractor::extract(HTML, &selectors);

    assert_eq!(fields["div.missing"], NOT_FOUND);
    assert_eq!(fields["h1#main-title"], "Hello World");
    assert_eq!(fields["div.content p"], "Paragraph 1");
}

#[test]
fn test_invalid_selector_records_sentinel() {
    let selectors = vec!["h1#main-title".to_string(), ":::not-a-selector".to_string()];
    let fields = FieldExtractor::extract(HTML, &selectors);

    assert_eq!(fields[":::not-a-selector"], NOT_FOUND);
    assert_eq!(fields["h1#main-title"], "Hello World");
}

#[test]
fn test_field_order_follows_selector_order() {
    let selectors = vec![
        "div.content p".to_string(),
        "h1#main-title".to_string(),
        "div.missing".to_string(),
    ];
    let fields = FieldExtractor::extract(HTML, &selectors);

    let keys: Vec<&String> = fields.keys().collect();
    assert_eq!(keys, vec!["div.content p", "h1#main-title", "div.missing"]);
}
