// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Map};

use crate::utils::csv::record_to_csv;

#[test]
fn test_record_to_csv_plain_values() {
    let mut record = Map::new();
    record.insert("h1".to_string(), json!("Title"));
    record.insert("p".to_string(), json!("Body"));

    let csv = record_to_csv(&record);
    assert_eq!(csv, "h1,p\r\nTitle,Body\r\n");
}

#[test]
fn test_record_to_csv_escapes_delimiters_and_quotes() {
    let mut record = Map::new();
    record.insert("title".to_string(), json!("Hello, \"World\""));
    record.insert("note".to_string(), json!("line1\nline2"));

    let csv = record_to_csv(&record);
    let mut lines = csv.split("\r\n");
    assert_eq!(lines.next().unwrap(), "title,note");
    assert_eq!(
        lines.next().unwrap(),
        "\"Hello, \"\"World\"\"\",\"line1\nline2\""
    );
}

#[test]
fn test_record_to_csv_joins_arrays_and_keeps_order() {
    let mut record = Map::new();
    record.insert("prices".to_string(), json!(["$1", "$2"]));
    record.insert("count".to_string(), json!(2));

    let csv = record_to_csv(&record);
    assert_eq!(csv, "prices,count\r\n$1; $2,2\r\n");
}
