// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 打分权重
///
/// 默认值与 Sphinx 搜索前端保持一致，同一份索引在两边的排序相同
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorer {
    /// 对象全名或最后一段与查询完全相同
    pub obj_name_match: i64,
    /// 对象最后一段包含查询
    pub obj_partial_match: i64,
    /// 按对象优先级（0、1、2）追加的分数
    pub obj_prio: [i64; 3],
    pub obj_prio_default: i64,
    /// 标题词完全匹配
    pub title: i64,
    pub partial_title: i64,
    /// 正文词完全匹配
    pub term: i64,
    pub partial_term: i64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            obj_name_match: 11,
            obj_partial_match: 6,
            obj_prio: [15, 5, -5],
            obj_prio_default: 0,
            title: 15,
            partial_title: 7,
            term: 5,
            partial_term: 2,
        }
    }
}

impl Scorer {
    pub fn object_priority(&self, priority: i64) -> i64 {
        usize::try_from(priority)
            .ok()
            .and_then(|p| self.obj_prio.get(p).copied())
            .unwrap_or(self.obj_prio_default)
    }

    /// 对象名匹配得分：`fullname_lower` 为小写全名，`query` 为小写查询片段
    pub fn object_name_score(
        &self,
        fullname_lower: &str,
        last_part_lower: &str,
        query: &str,
    ) -> i64 {
        if fullname_lower == query || last_part_lower == query {
            self.obj_name_match
        } else if last_part_lower.contains(query) {
            self.obj_partial_match
        } else {
            0
        }
    }

    /// 章节标题匹配得分，按查询覆盖的比例缩放
    pub fn title_section_score(&self, query_len: usize, title_len: usize) -> i64 {
        if title_len == 0 {
            return 0;
        }
        (self.title as f64 * query_len as f64 / title_len as f64).round() as i64
    }

    /// 索引条目匹配得分，按查询覆盖的比例缩放到 0..=100
    pub fn index_entry_score(&self, query_len: usize, entry_len: usize) -> i64 {
        if entry_len == 0 {
            return 0;
        }
        (100.0 * query_len as f64 / entry_len as f64).round() as i64
    }
}
