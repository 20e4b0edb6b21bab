// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::search_index::DocId;

/// 文档目录中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: DocId,
    pub docname: String,
    pub filename: String,
    pub title: String,
    pub url: String,
}

/// 对象描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub fullname: String,
    pub prefix: String,
    pub name: String,
    /// 类型标记，例如 `py:class`
    pub objtype: Option<String>,
    /// 类型展示名，例如 `Python class`
    pub label: Option<String>,
    pub priority: i64,
    pub docname: String,
    pub title: String,
    pub anchor: String,
    pub url: String,
}

/// 索引统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub terms: usize,
    pub title_terms: usize,
    pub objects: usize,
    pub objects_by_type: BTreeMap<String, usize>,
    pub all_titles: usize,
    pub index_entries: usize,
}
