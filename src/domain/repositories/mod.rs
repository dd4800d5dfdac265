// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的持久化抽象契约，具体实现由基础设施层提供。
/// 管道只依赖这些接口，存储句柄通过依赖注入传入，不使用进程级全局状态。
pub mod result_store;
