// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 索引载荷解析
//!
//! Sphinx 生成的 `searchindex.js` 形如 `Search.setIndex({...})`，
//! 去掉包装调用后剩下的对象字面量按 JSON5 解析（不加引号的键、单引号字符串、
//! 尾随逗号与注释）。也接受不带包装的裸对象（例如手写的 JSON 索引）。

use serde_json::Value;
use tracing::debug;

use crate::domain::models::search_index::SearchIndex;
use crate::domain::repositories::index_repository::IndexLoadError;

const WRAPPER_PREFIX: &str = "Search.setIndex(";

/// 取出包装调用中的对象字面量
pub fn unwrap_payload(source: &str) -> Result<&str, IndexLoadError> {
    let trimmed = source.trim_start_matches('\u{feff}').trim();
    let Some(rest) = trimmed.strip_prefix(WRAPPER_PREFIX) else {
        return Ok(trimmed);
    };

    let rest = rest.trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    rest.strip_suffix(')').ok_or_else(|| {
        IndexLoadError::Parse("missing closing ')' after Search.setIndex payload".to_string())
    })
}

/// 将对象字面量解析为 JSON 值
///
/// 出错信息带上行列位置，便于定位被截断或手工改坏的索引
pub fn parse_payload(payload: &str) -> Result<Value, IndexLoadError> {
    json5::from_str(payload).map_err(|e| match e {
        json5::Error::Message {
            msg,
            location: Some(loc),
        } => IndexLoadError::Parse(format!("{} (line {}, column {})", msg, loc.line, loc.column)),
        json5::Error::Message { msg, location: None } => IndexLoadError::Parse(msg),
    })
}

/// 解析 `searchindex.js` 内容为内存索引
pub fn parse_search_index(source: &str) -> Result<SearchIndex, IndexLoadError> {
    let value = parse_payload(unwrap_payload(source)?)?;
    if !value.is_object() {
        return Err(IndexLoadError::Parse(
            "index payload is not an object literal".to_string(),
        ));
    }

    let index = SearchIndex::from_value(value)?;
    debug!(
        documents = index.document_count(),
        terms = index.terms().len(),
        objects = index.objects().len(),
        "Parsed search index"
    );
    Ok(index)
}
