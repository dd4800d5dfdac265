// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use extractrs::domain::models::extraction::{ExtractionMode, ExtractionRequest, RawPage};
use extractrs::domain::repositories::result_store::ResultStore;
use extractrs::domain::services::pipeline::ExtractionPipeline;
use extractrs::engines::traits::PageFetcher;
use extractrs::infrastructure::inference::ollama_client::OllamaClient;
use extractrs::utils::errors::PipelineError;

struct FixedPageFetcher;

#[async_trait]
impl PageFetcher for FixedPageFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPage, PipelineError> {
        Ok(RawPage {
            source_url: url.to_string(),
            html: "<html><body><h1>Title</h1><p>Body</p></body></html>".to_string(),
            text: "Title Body".to_string(),
        })
    }
}

#[derive(Default)]
struct MapStore {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl ResultStore for MapStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), PipelineError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, PipelineError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}

fn pipeline_against(server: &MockServer, store: Arc<MapStore>) -> ExtractionPipeline {
    let inference = Arc::new(OllamaClient::new(format!("{}/ollama", server.uri()), 5));
    ExtractionPipeline::new(
        Arc::new(FixedPageFetcher),
        inference,
        store,
        "llama3.1".to_string(),
    )
}

#[tokio::test]
async fn scrape_example_page_through_stub_inference_endpoint() {
    let server = MockServer::start().await;
    // 端点回显未加引号键的近似JSON，走完整的修复路径
    Mock::given(method("POST"))
        .and(path("/ollama"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "{h1: \"Title\", p: \"Body\"}"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MapStore::default());
    let pipeline = pipeline_against(&server, store.clone());

    let outcome = pipeline
        .run(ExtractionRequest {
            url: "https://example.com".to_string(),
            selectors: vec!["h1".to_string(), "p".to_string()],
            model: None,
            mode: ExtractionMode::ModelDriven,
        })
        .await
        .unwrap();

    assert_eq!(outcome.record["h1"], "Title");
    assert_eq!(outcome.record["p"], "Body");

    // 生成的键不含被替换掉的分隔符
    assert!(!outcome.key.contains(':'));
    assert!(!outcome.key.contains('.'));

    // 原始文本与格式化记录都已落盘
    let entries = store.entries.lock().unwrap();
    assert_eq!(entries.get(&format!("{}-raw", outcome.key)).unwrap(), "Title Body");
    let stored: serde_json::Value =
        serde_json::from_str(entries.get(&outcome.key).unwrap()).unwrap();
    assert_eq!(stored["h1"], "Title");
}

#[tokio::test]
async fn unparseable_reply_fails_without_formatted_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ollama"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "nonsense"})))
        .mount(&server)
        .await;

    let store = Arc::new(MapStore::default());
    let pipeline = pipeline_against(&server, store.clone());

    let err = pipeline
        .run(ExtractionRequest {
            url: "https://example.com".to_string(),
            selectors: vec!["h1".to_string()],
            model: None,
            mode: ExtractionMode::ModelDriven,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Parse(_)));
    assert!(store.entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_fails_health_check() {
    let store = Arc::new(MapStore::default());
    let inference = Arc::new(OllamaClient::new("http://127.0.0.1:1/ollama".to_string(), 1));
    let pipeline = ExtractionPipeline::new(
        Arc::new(FixedPageFetcher),
        inference,
        store,
        "llama3.1".to_string(),
    );

    let err = pipeline
        .run(ExtractionRequest {
            url: "https://example.com".to_string(),
            selectors: vec!["h1".to_string()],
            model: None,
            mode: ExtractionMode::Direct,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::InferenceUnavailable(_)));
}
