// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use super::stemmer;

/// 英文停用词，与 Sphinx 英文索引一致
pub const STOP_WORDS: &[&str] = &[
    "a", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "near", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
    "these", "they", "this", "to", "was", "will", "with",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// 按非单词字符切分查询，丢弃空片段
pub fn split_query(query: &str) -> impl Iterator<Item = &str> {
    query.split(|c: char| !is_word_char(c)).filter(|s| !s.is_empty())
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// 解析后的查询
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// 原始查询，连续空白折叠为一个空格
    pub raw: String,
    /// 用于对象名匹配的小写片段，含停用词
    pub object_terms: Vec<String>,
    /// 词干化后的检索词
    pub search_terms: Vec<String>,
    /// 词干化后的排除词（`-word`）
    pub excluded_terms: Vec<String>,
    /// 供前端高亮的小写原词
    pub highlight_terms: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        let raw = query.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut parsed = ParsedQuery {
            raw: raw.clone(),
            ..Default::default()
        };

        for chunk in raw.split_whitespace() {
            let (excluded, body) = match chunk.strip_prefix('-') {
                Some(rest) if !rest.is_empty() => (true, rest),
                _ => (false, chunk),
            };

            for piece in split_query(body) {
                let lower = piece.to_lowercase();
                if !excluded {
                    push_unique(&mut parsed.object_terms, lower.clone());
                }
                if is_stop_word(&lower) || lower.chars().all(|c| c.is_ascii_digit()) {
                    continue;
                }
                let word = stemmer::stem(&lower);
                if excluded {
                    push_unique(&mut parsed.excluded_terms, word);
                } else {
                    push_unique(&mut parsed.search_terms, word);
                    push_unique(&mut parsed.highlight_terms, lower);
                }
            }
        }

        parsed
    }

    /// 既没有对象片段也没有检索词
    pub fn is_empty(&self) -> bool {
        self.object_terms.is_empty() && self.search_terms.is_empty()
    }

    /// 缓存键使用的规范形式；两个查询规范形式相同则结果相同
    pub fn normalized(&self) -> String {
        self.raw.to_lowercase()
    }
}
