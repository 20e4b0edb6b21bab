// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 结果来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Index,
    Object,
    Text,
    Title,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub docname: String,
    pub title: String,
    /// 以 `#` 开头，或为空
    pub anchor: String,
    pub description: Option<String>,
    pub score: i64,
    pub filename: String,
    pub kind: ResultKind,
    pub url: String,
}

impl SearchResult {
    /// 去重键：文档、标题、锚点、描述与文件名
    pub fn dedup_key(&self) -> (&str, &str, &str, Option<&str>, &str) {
        (
            &self.docname,
            &self.title,
            &self.anchor,
            self.description.as_deref(),
            &self.filename,
        )
    }
}
