// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

use super::link_builder::LinkBuilder;
use super::query_parser::ParsedQuery;
use super::scorer::Scorer;
use crate::domain::models::search_index::{DocId, SearchIndex};
use crate::domain::models::search_result::{ResultKind, SearchResult};

/// 在单个索引快照上执行查询
pub struct SearchService {
    index: Arc<SearchIndex>,
    scorer: Scorer,
    links: LinkBuilder,
}

impl SearchService {
    pub fn new(index: Arc<SearchIndex>, links: LinkBuilder) -> Self {
        Self::with_scorer(index, links, Scorer::default())
    }

    pub fn with_scorer(index: Arc<SearchIndex>, links: LinkBuilder, scorer: Scorer) -> Self {
        Self {
            index,
            scorer,
            links,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// 查询并返回按分数排序的结果，最多 `limit` 条
    pub fn search(&self, query: &ParsedQuery, limit: usize) -> Vec<SearchResult> {
        let mut normal = Vec::new();
        let mut non_main = Vec::new();

        for term in &query.object_terms {
            normal.extend(self.perform_object_search(term, &query.object_terms));
        }
        normal.extend(self.perform_terms_search(query));
        normal.extend(self.perform_title_search(&query.raw));
        let (main_entries, other_entries) = self.perform_index_entry_search(&query.raw);
        normal.extend(main_entries);
        non_main.extend(other_entries);

        order_by_score_then_title(&mut normal);
        order_by_score_then_title(&mut non_main);

        let mut seen = HashSet::new();
        let mut results = Vec::new();
        for result in normal.into_iter().chain(non_main) {
            let key = {
                let (doc, title, anchor, descr, file) = result.dedup_key();
                (
                    doc.to_string(),
                    title.to_string(),
                    anchor.to_string(),
                    descr.map(str::to_string),
                    file.to_string(),
                )
            };
            if seen.insert(key) {
                results.push(result);
            }
        }

        debug!(
            query = %query.raw,
            total = results.len(),
            limit,
            "Search completed"
        );
        results.truncate(limit);
        results
    }

    /// 按对象全名匹配单个查询片段
    pub fn perform_object_search(
        &self,
        object: &str,
        object_terms: &[String],
    ) -> Vec<SearchResult> {
        let index = &*self.index;
        let mut results = Vec::new();

        for obj in index.objects() {
            if !obj.fullname_lower.contains(object) {
                continue;
            }
            let (Some(docname), Some(filename), Some(title)) = (
                index.docname(obj.doc),
                index.filename(obj.doc),
                index.title(obj.doc),
            ) else {
                continue;
            };

            let objtype = index.object_type(obj.objtype);
            let label = objtype.map(|t| t.label.as_str()).unwrap_or("object");

            // every other term has to show up somewhere around the object
            let other_terms: Vec<&String> = object_terms.iter().filter(|t| *t != object).collect();
            if !other_terms.is_empty() {
                let haystack =
                    format!("{} {} {} {}", obj.prefix, obj.name, label, title).to_lowercase();
                if other_terms.iter().any(|t| !haystack.contains(t.as_str())) {
                    continue;
                }
            }

            let score = self
                .scorer
                .object_name_score(&obj.fullname_lower, obj.last_part_lower(), object)
                + self.scorer.object_priority(obj.priority);
            let anchor = format!("#{}", obj.resolve_anchor(objtype));

            results.push(SearchResult {
                docname: docname.to_string(),
                title: obj.fullname.clone(),
                url: self.links.url(docname, &anchor),
                anchor,
                description: Some(format!("{}, in {}", label, title)),
                score,
                filename: filename.to_string(),
                kind: ResultKind::Object,
            });
        }

        results
    }

    /// 全文检索：正文词与标题词，含部分匹配
    pub fn perform_terms_search(&self, query: &ParsedQuery) -> Vec<SearchResult> {
        let index = &*self.index;
        let mut score_map: HashMap<DocId, HashMap<&str, i64>> = HashMap::new();
        let mut file_map: BTreeMap<DocId, Vec<&str>> = BTreeMap::new();

        for word in &query.search_terms {
            let mut records: Vec<(&[DocId], i64)> = Vec::new();
            let exact_term = index.term_postings(word);
            let exact_title = index.title_term_postings(word);
            if let Some(docs) = exact_term {
                records.push((docs, self.scorer.term));
            }
            if let Some(docs) = exact_title {
                records.push((docs, self.scorer.title));
            }

            if word.chars().count() > 2 {
                if exact_term.is_none() {
                    for (term, docs) in index.terms() {
                        if term.contains(word.as_str()) {
                            records.push((docs.as_slice(), self.scorer.partial_term));
                        }
                    }
                }
                if exact_title.is_none() {
                    for (term, docs) in index.title_terms() {
                        if term.contains(word.as_str()) {
                            records.push((docs.as_slice(), self.scorer.partial_title));
                        }
                    }
                }
            }

            for (docs, score) in records {
                for &doc in docs {
                    let best = score_map
                        .entry(doc)
                        .or_default()
                        .entry(word.as_str())
                        .or_insert(score);
                    *best = (*best).max(score);

                    let words = file_map.entry(doc).or_default();
                    if !words.contains(&word.as_str()) {
                        words.push(word.as_str());
                    }
                }
            }
        }

        // short terms are optional: a document may match only the longer ones
        let long_terms = query
            .search_terms
            .iter()
            .filter(|t| t.chars().count() > 2)
            .count();

        let mut results = Vec::new();
        for (doc, words) in file_map {
            if words.len() != query.search_terms.len() && words.len() != long_terms {
                continue;
            }
            if query.excluded_terms.iter().any(|term| {
                index
                    .term_postings(term)
                    .is_some_and(|docs| docs.contains(&doc))
                    || index
                        .title_term_postings(term)
                        .is_some_and(|docs| docs.contains(&doc))
            }) {
                continue;
            }
            let (Some(docname), Some(filename), Some(title)) =
                (index.docname(doc), index.filename(doc), index.title(doc))
            else {
                continue;
            };

            let score = words
                .iter()
                .filter_map(|w| score_map.get(&doc).and_then(|m| m.get(w)).copied())
                .max()
                .unwrap_or(0);

            results.push(SearchResult {
                docname: docname.to_string(),
                title: title.to_string(),
                anchor: String::new(),
                description: None,
                score,
                filename: filename.to_string(),
                kind: ResultKind::Text,
                url: self.links.url(docname, ""),
            });
        }

        results
    }

    /// 章节标题匹配（需要索引提供 `alltitles`）
    pub fn perform_title_search(&self, raw_query: &str) -> Vec<SearchResult> {
        let index = &*self.index;
        let query_lower = raw_query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }
        let query_len = query_lower.chars().count();

        let mut results = Vec::new();
        for (title, locations) in index.all_titles() {
            let title_len = title.chars().count();
            if !title.trim().to_lowercase().contains(&query_lower) || query_len * 2 < title_len {
                continue;
            }
            for location in locations {
                let (Some(docname), Some(filename), Some(doc_title)) = (
                    index.docname(location.doc),
                    index.filename(location.doc),
                    index.title(location.doc),
                ) else {
                    continue;
                };
                let is_doc_title = doc_title == title;
                let score = self.scorer.title_section_score(query_len, title_len)
                    + i64::from(is_doc_title);
                let anchor = location
                    .anchor
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .map(|a| format!("#{}", a))
                    .unwrap_or_default();
                let display = if is_doc_title {
                    title.clone()
                } else {
                    format!("{} > {}", doc_title, title)
                };

                results.push(SearchResult {
                    docname: docname.to_string(),
                    title: display,
                    url: self.links.url(docname, &anchor),
                    anchor,
                    description: None,
                    score,
                    filename: filename.to_string(),
                    kind: ResultKind::Title,
                });
            }
        }
        results
    }

    /// 索引条目匹配（需要索引提供 `indexentries`），返回（主条目，其余条目）
    pub fn perform_index_entry_search(
        &self,
        raw_query: &str,
    ) -> (Vec<SearchResult>, Vec<SearchResult>) {
        let index = &*self.index;
        let query_lower = raw_query.trim().to_lowercase();
        let mut main = Vec::new();
        let mut others = Vec::new();
        if query_lower.is_empty() {
            return (main, others);
        }
        let query_len = query_lower.chars().count();

        for (entry, locations) in index.index_entries() {
            let entry_len = entry.chars().count();
            if !entry.contains(&query_lower) || query_len * 2 < entry_len {
                continue;
            }
            for location in locations {
                let (Some(docname), Some(filename), Some(title)) = (
                    index.docname(location.doc),
                    index.filename(location.doc),
                    index.title(location.doc),
                ) else {
                    continue;
                };
                let anchor = location
                    .anchor
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .map(|a| format!("#{}", a))
                    .unwrap_or_default();
                let result = SearchResult {
                    docname: docname.to_string(),
                    title: title.to_string(),
                    url: self.links.url(docname, &anchor),
                    anchor,
                    description: None,
                    score: self.scorer.index_entry_score(query_len, entry_len),
                    filename: filename.to_string(),
                    kind: ResultKind::Index,
                };
                if location.is_main {
                    main.push(result);
                } else {
                    others.push(result);
                }
            }
        }
        (main, others)
    }
}

/// 分数降序，同分按小写标题升序
fn order_by_score_then_title(results: &mut [SearchResult]) {
    results.sort_by(|a, b| match b.score.cmp(&a.score) {
        Ordering::Equal => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        other => other,
    });
}
