// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::domain::models::search_result::SearchResult;

/// 缓存键：规范化后的查询与结果上限
pub type QueryKey = (String, usize);

/// 查询结果 LRU 缓存
///
/// 容量为 0 时关闭缓存，所有读取都未命中。每个索引快照持有自己的缓存，重新加载时随快照一起替换
pub struct QueryCache {
    entries: Option<Mutex<LruCache<QueryKey, Arc<Vec<SearchResult>>>>>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn get(&self, query: &str, limit: usize) -> Option<Arc<Vec<SearchResult>>> {
        let entries = self.entries.as_ref()?;
        entries.lock().get(&(query.to_string(), limit)).cloned()
    }

    pub fn insert(&self, query: String, limit: usize, results: Arc<Vec<SearchResult>>) {
        if let Some(entries) = &self.entries {
            entries.lock().put((query, limit), results);
        }
    }

    /// 当前缓存的查询数
    pub fn entry_count(&self) -> usize {
        self.entries.as_ref().map_or(0, |e| e.lock().len())
    }
}
