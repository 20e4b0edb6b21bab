// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，依赖于领域层的抽象接口。
///
/// 包含的子模块：
/// - 缓存（cache）：查询结果的 LRU 缓存
/// - 载荷解析（loader）：`searchindex.js` 的 JavaScript 对象字面量解析
/// - 指标（metrics）：Prometheus 指标导出与记录
/// - 仓库实现（repositories）：从本地文件读取索引
pub mod cache;
pub mod loader;
pub mod metrics;
pub mod repositories;
