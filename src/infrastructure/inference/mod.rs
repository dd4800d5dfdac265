// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 推理模块
///
/// 提供与本地Ollama桥接端点交互的HTTP客户端实现
pub mod ollama_client;
