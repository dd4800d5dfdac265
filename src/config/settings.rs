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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、Redis、页面获取和推理端点的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Redis配置
    pub redis: RedisSettings,
    /// 页面获取配置
    pub fetcher: FetcherSettings,
    /// 推理端点配置
    pub inference: InferenceSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Redis配置设置
#[derive(Debug, Deserialize)]
pub struct RedisSettings {
    /// Redis连接URL
    pub url: String,
}

/// 页面获取配置设置
#[derive(Debug, Deserialize)]
pub struct FetcherSettings {
    /// 清理后页面文本的最大字符数
    pub max_text_chars: usize,
    /// 页面导航超时时间（秒）
    pub nav_timeout_secs: u64,
}

/// 推理端点配置设置
#[derive(Debug, Deserialize)]
pub struct InferenceSettings {
    /// 推理端点URL（固定端口，不做端口扫描）
    pub endpoint: String,
    /// 默认模型标识
    pub default_model: String,
    /// 推理调用超时时间（秒），本地推理可能很慢
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default Redis settings
            .set_default("redis.url", "redis://127.0.0.1:6379")?
            // Default Fetcher settings
            .set_default("fetcher.max_text_chars", 5000)?
            .set_default("fetcher.nav_timeout_secs", 30)?
            // Default Inference settings
            .set_default("inference.endpoint", "http://127.0.0.1:11400/ollama")?
            .set_default("inference.default_model", "llama3.1")?
            .set_default("inference.timeout_secs", 300)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("EXTRACTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
