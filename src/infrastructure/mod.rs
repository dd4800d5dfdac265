// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供外部服务集成：Redis存储与推理端点客户端
pub mod cache;
pub mod inference;
