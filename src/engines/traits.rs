// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::extraction::RawPage;
use crate::utils::errors::PipelineError;

/// 页面获取特质
///
/// 把一个URL还原为完整渲染后的页面内容（执行客户端脚本、等待网络
/// 静默后再读取），并附带清理截断过的可见文本
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取并渲染页面
    ///
    /// 网络失败、导航超时或渲染引擎崩溃都表现为 `FetchError`，
    /// 调用方中止整条管道，无部分结果，无重试。
    async fn fetch(&self, url: &str) -> Result<RawPage, PipelineError>;
}
