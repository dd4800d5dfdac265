// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use axum::{
    routing::{get, post},
    Router,
};
use extractrs::config::settings::Settings;
use extractrs::domain::services::inference_service::InferenceService;
use extractrs::domain::services::pipeline::ExtractionPipeline;
use extractrs::engines::browser_engine::BrowserEngine;
use extractrs::infrastructure::cache::redis_store::RedisResultStore;
use extractrs::infrastructure::inference::ollama_client::OllamaClient;
use extractrs::presentation::handlers::{result_handler, scrape_handler};
use extractrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting extractrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize components; the pipeline owns no global state,
    //    every collaborator is injected here
    let store = Arc::new(RedisResultStore::new(&settings.redis.url)?);
    info!("Redis result store initialized");

    let inference: Arc<dyn InferenceService> = Arc::new(OllamaClient::new(
        settings.inference.endpoint.clone(),
        settings.inference.timeout_secs,
    ));
    let fetcher = Arc::new(BrowserEngine::new(
        settings.fetcher.max_text_chars,
        settings.fetcher.nav_timeout_secs,
    ));

    let pipeline = Arc::new(ExtractionPipeline::new(
        fetcher,
        inference.clone(),
        store,
        settings.inference.default_model.clone(),
    ));
    info!("Extraction pipeline initialized");

    // 4. Build router
    let app = Router::new()
        .route("/health", get(scrape_handler::health))
        .route("/scrape", post(scrape_handler::scrape))
        .route("/results/{key}", get(result_handler::get_result))
        .route("/results/{key}/export", get(result_handler::export_result))
        .layer(Extension(pipeline))
        .layer(Extension(inference))
        .layer(TraceLayer::new_for_http());

    // 5. Start server on the configured port; no port scanning
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
