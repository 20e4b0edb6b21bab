// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：索引、结果、目录与校验报告
/// - 仓库接口（repositories）：索引来源的抽象接口
/// - 服务（services）：查询、校验与目录服务
///
/// 领域层不依赖于任何外部实现，索引的读取与解析由基础设施层提供。
pub mod models;
pub mod repositories;
pub mod services;
