// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 搜索索引（search_index）：`searchindex.js` 载荷的原始结构与规范化索引
/// - 搜索结果（search_result）：排序后的文档/对象引用
/// - 目录（catalog）：文档、对象描述与索引统计
/// - 完整性（integrity）：校验报告
pub mod catalog;
pub mod integrity;
pub mod search_index;
pub mod search_result;
