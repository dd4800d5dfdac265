// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::models::extraction::RawPage;
use crate::engines::content_cleaner::clean_page_text;
use crate::engines::traits::PageFetcher;
use crate::utils::errors::PipelineError;

// Global browser instance to avoid re-launching Chrome on every request.
static BROWSER_INSTANCE: OnceCell<Browser> = OnceCell::const_new();

// Asynchronously gets or initializes the shared browser instance.
// This function ensures that the browser is launched only once.
async fn get_browser() -> Result<&'static Browser, PipelineError> {
    BROWSER_INSTANCE
        .get_or_try_init(|| async {
            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(30));

            builder = builder.arg("--disable-gpu").arg("--disable-dev-shm-usage");

            let (browser, mut handler) = Browser::launch(
                builder
                    .build()
                    .map_err(|e| PipelineError::Fetch(e.to_string()))?,
            )
            .await
            .map_err(|e| PipelineError::Fetch(e.to_string()))?;

            // Spawn a handler to process browser events
            tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(browser)
        })
        .await
}

/// 浏览器页面获取引擎
///
/// 基于chromiumoxide的无头Chromium实现：完整渲染页面（执行客户端
/// 脚本并等待导航完成）后读取HTML，再清理截断为有界文本
pub struct BrowserEngine {
    /// 清理后文本的最大字符数
    max_text_chars: usize,
    /// 单次导航的超时时间
    nav_timeout: Duration,
}

impl BrowserEngine {
    /// 创建新的浏览器引擎实例
    pub fn new(max_text_chars: usize, nav_timeout_secs: u64) -> Self {
        Self {
            max_text_chars,
            nav_timeout: Duration::from_secs(nav_timeout_secs),
        }
    }
}

/// 在截止时间内驱动导航future，超时即丢弃它并映射为 `FetchError`
///
/// 页面句柄必须由调用方在超时之外持有：截止时间到时这里只取消导航，
/// 对应的标签页仍然可以被关闭
pub(crate) async fn render_with_deadline<F>(
    nav: F,
    deadline: Duration,
    url: &str,
) -> Result<String, PipelineError>
where
    F: std::future::Future<Output = Result<String, PipelineError>>,
{
    match tokio::time::timeout(deadline, nav).await {
        Ok(result) => result,
        Err(_) => Err(PipelineError::Fetch(format!(
            "navigation timed out for {}",
            url
        ))),
    }
}

#[async_trait]
impl PageFetcher for BrowserEngine {
    /// 获取并渲染页面
    ///
    /// 导航包在一个超时里，任何失败统一映射为 `FetchError`
    async fn fetch(&self, url: &str) -> Result<RawPage, PipelineError> {
        let browser = get_browser().await?;

        // 标签页在超时之外创建并持有，超时只丢弃导航future；
        // 浏览器实例是进程级共享的，泄漏的标签页不会被回收
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| PipelineError::Fetch(e.to_string()))?;

        let nav = async {
            page.goto(url)
                .await
                .map_err(|e| PipelineError::Fetch(e.to_string()))?;

            // 等待导航到达静默状态，捕获动态加载的内容
            page.wait_for_navigation()
                .await
                .map_err(|e| PipelineError::Fetch(e.to_string()))?;

            page.content()
                .await
                .map_err(|e| PipelineError::Fetch(e.to_string()))
        };
        let result = render_with_deadline(nav, self.nav_timeout, url).await;

        // 页面用完即关，超时和失败路径也一样；浏览器实例保持共享
        let _ = page.close().await;
        let html = result?;

        let text = clean_page_text(&html, self.max_text_chars);
        debug!(url, chars = text.chars().count(), "page rendered and cleaned");

        Ok(RawPage {
            source_url: url.to_string(),
            html,
            text,
        })
    }
}
