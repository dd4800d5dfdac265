// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 处理HTTP请求和响应，管道错误在这里映射为失败响应
pub mod errors;
pub mod handlers;
