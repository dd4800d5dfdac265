// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含提取管道的核心业务逻辑服务：
/// - 字段提取服务（field_extractor）：按选择器从渲染文档中提取文本
/// - 响应规范化服务（normalizer）：把模型的近似JSON回复修复为严格结构化数据
/// - 推理服务接口（inference_service）：与外部推理端点交互的抽象契约
/// - 提取管道（pipeline）：编排获取、提取、规范化和存储的完整流程
pub mod field_extractor;
#[cfg(test)]
mod field_extractor_test;
pub mod inference_service;
pub mod normalizer;
#[cfg(test)]
mod normalizer_test;
pub mod pipeline;
