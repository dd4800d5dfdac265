// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供基于Redis的结果存储实现
pub mod redis_store;
