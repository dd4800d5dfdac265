// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use crate::domain::repositories::result_store::ResultStore;
use crate::utils::errors::PipelineError;

/// Redis结果存储
///
/// 每次操作获取一个连接、执行一次读写后立即释放，请求之间不共享
/// 持久连接。值是纯字符串（原始文本）或JSON序列化文本（格式化记录），
/// 无TTL，重复键静默覆盖。
#[derive(Clone)]
pub struct RedisResultStore {
    /// Redis客户端
    client: redis::Client,
}

impl RedisResultStore {
    /// 创建新的Redis结果存储实例
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    ///
    /// # 返回值
    ///
    /// * `Ok(RedisResultStore)` - 结果存储实例
    /// * `Err(PipelineError)` - 连接URL非法
    pub fn new(redis_url: &str) -> Result<Self, PipelineError> {
        let client =
            redis::Client::open(redis_url).map_err(|e| PipelineError::Store(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ResultStore for RedisResultStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), PipelineError> {
        let mut con = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PipelineError::Store(e.to_string()))?;
        con.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| PipelineError::Store(e.to_string()))?;
        debug!(key, "value stored");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, PipelineError> {
        let mut con = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PipelineError::Store(e.to_string()))?;
        let value: Option<String> = con
            .get(key)
            .await
            .map_err(|e| PipelineError::Store(e.to_string()))?;
        Ok(value)
    }
}
