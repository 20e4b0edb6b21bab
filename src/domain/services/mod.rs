// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含查询与校验的核心逻辑，全部是对只读索引的纯计算：
/// - 词干提取（stemmer）：Porter 算法，查询词与索引词条按同一规则归一
/// - 查询解析（query_parser）：切分、停用词、排除词与高亮词
/// - 打分（scorer）：对象、标题、正文各类匹配的权重
/// - 链接（link_builder）：文档与锚点到 URL 的映射
/// - 搜索服务（search_service）：对象、全文、标题与索引条目检索及排序
/// - 完整性校验（integrity_service）：文档与对象引用的一致性检查
/// - 目录服务（catalog_service）：文档、对象与统计查询
pub mod catalog_service;
pub mod integrity_service;
pub mod link_builder;
pub mod query_parser;
pub mod scorer;
pub mod search_service;
pub mod stemmer;
