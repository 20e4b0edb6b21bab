// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// 文档在目录中的下标
pub type DocId = usize;

/// 对象类型编号（`objtypes` / `objnames` 的键）
pub type ObjTypeId = u32;

/// 索引结构错误
///
/// 载荷能被解析为值，但不符合 Sphinx 索引结构时返回
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("invalid object type key '{0}': expected a non-negative integer")]
    InvalidObjTypeKey(String),
    #[error("malformed index payload: {0}")]
    Malformed(String),
}

/// 倒排表中的一项
///
/// 生成器对只命中一个文档的词条写单个整数，其余写数组
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPostings {
    Single(DocId),
    Many(Vec<DocId>),
}

impl RawPostings {
    /// 规范化为有序且去重的文档列表
    pub fn into_sorted(self) -> Vec<DocId> {
        let mut docs = match self {
            RawPostings::Single(doc) => vec![doc],
            RawPostings::Many(docs) => docs,
        };
        docs.sort_unstable();
        docs.dedup();
        docs
    }
}

/// 某个前缀下的对象集合
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawObjectGroup {
    /// `[[doc, objtype, priority, anchor, name], ...]`
    List(Vec<(DocId, ObjTypeId, i64, String, String)>),
    /// 旧格式：`{ name: [doc, objtype, priority, anchor] }`
    Legacy(BTreeMap<String, (DocId, ObjTypeId, i64, String)>),
}

/// 布尔标记，旧版生成器会写成 0/1
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Int(i64),
}

impl RawFlag {
    pub fn is_set(self) -> bool {
        match self {
            RawFlag::Bool(b) => b,
            RawFlag::Int(i) => i != 0,
        }
    }
}

/// `searchindex.js` 载荷的原始结构
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchIndex {
    pub docnames: Vec<String>,
    pub filenames: Vec<String>,
    pub titles: Vec<String>,
    #[serde(default)]
    pub terms: HashMap<String, RawPostings>,
    #[serde(default)]
    pub titleterms: HashMap<String, RawPostings>,
    #[serde(default)]
    pub objects: BTreeMap<String, RawObjectGroup>,
    #[serde(default)]
    pub objtypes: BTreeMap<String, String>,
    #[serde(default)]
    pub objnames: BTreeMap<String, (String, String, String)>,
    #[serde(default)]
    pub envversion: BTreeMap<String, Value>,
    #[serde(default)]
    pub alltitles: BTreeMap<String, Vec<(DocId, Option<String>)>>,
    #[serde(default)]
    pub indexentries: BTreeMap<String, Vec<(DocId, Option<String>, RawFlag)>>,
}

/// 对象类型说明，来自 `objnames`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectType {
    /// 域，例如 `py`
    pub domain: String,
    /// 角色，例如 `class`
    pub role: String,
    /// 展示名，例如 `Python class`
    pub label: String,
}

/// 索引中的一个对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedObject {
    pub prefix: String,
    pub name: String,
    pub fullname: String,
    #[serde(skip)]
    pub fullname_lower: String,
    pub doc: DocId,
    pub objtype: ObjTypeId,
    pub priority: i64,
    /// 原始锚点：`""` 表示使用全名，`"-"` 表示 `role-fullname`
    pub anchor: String,
}

impl IndexedObject {
    pub fn new(
        prefix: &str,
        name: &str,
        doc: DocId,
        objtype: ObjTypeId,
        priority: i64,
        anchor: String,
    ) -> Self {
        let fullname = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        };
        Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
            fullname_lower: fullname.to_lowercase(),
            fullname,
            doc,
            objtype,
            priority,
            anchor,
        }
    }

    /// 解析最终锚点（不含 `#`）
    pub fn resolve_anchor(&self, objtype: Option<&ObjectType>) -> String {
        match self.anchor.as_str() {
            "" => self.fullname.clone(),
            "-" => {
                let role = objtype.map(|t| t.role.as_str()).unwrap_or("object");
                format!("{}-{}", role, self.fullname)
            }
            other => other.to_string(),
        }
    }

    /// 全名的最后一段（小写）
    pub fn last_part_lower(&self) -> &str {
        self.fullname_lower
            .rsplit('.')
            .next()
            .unwrap_or(self.fullname_lower.as_str())
    }
}

/// 章节标题的位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleLocation {
    pub doc: DocId,
    pub anchor: Option<String>,
}

/// 索引条目的位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntryLocation {
    pub doc: DocId,
    pub anchor: Option<String>,
    pub is_main: bool,
}

/// 只读的搜索索引
///
/// 载入后不可变；文档目录保留为三个平行数组，长度不一致由完整性校验报告
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    docnames: Vec<String>,
    filenames: Vec<String>,
    titles: Vec<String>,
    terms: HashMap<String, Vec<DocId>>,
    title_terms: HashMap<String, Vec<DocId>>,
    objects: Vec<IndexedObject>,
    object_types: BTreeMap<ObjTypeId, ObjectType>,
    object_type_tags: BTreeMap<ObjTypeId, String>,
    all_titles: Vec<(String, Vec<TitleLocation>)>,
    index_entries: Vec<(String, Vec<IndexEntryLocation>)>,
    env_version: BTreeMap<String, Value>,
}

fn parse_objtype_key(key: &str) -> Result<ObjTypeId, SchemaError> {
    key.trim()
        .parse::<ObjTypeId>()
        .map_err(|_| SchemaError::InvalidObjTypeKey(key.to_string()))
}

impl SearchIndex {
    /// 从原始载荷构建规范化索引
    pub fn from_raw(raw: RawSearchIndex) -> Result<Self, SchemaError> {
        let terms = raw
            .terms
            .into_iter()
            .map(|(term, postings)| (term, postings.into_sorted()))
            .collect();
        let title_terms = raw
            .titleterms
            .into_iter()
            .map(|(term, postings)| (term, postings.into_sorted()))
            .collect();

        let mut objects = Vec::new();
        for (prefix, group) in &raw.objects {
            match group {
                RawObjectGroup::List(entries) => {
                    for (doc, objtype, priority, anchor, name) in entries {
                        objects.push(IndexedObject::new(
                            prefix,
                            name,
                            *doc,
                            *objtype,
                            *priority,
                            anchor.clone(),
                        ));
                    }
                }
                RawObjectGroup::Legacy(entries) => {
                    for (name, (doc, objtype, priority, anchor)) in entries {
                        objects.push(IndexedObject::new(
                            prefix,
                            name,
                            *doc,
                            *objtype,
                            *priority,
                            anchor.clone(),
                        ));
                    }
                }
            }
        }

        let mut object_types = BTreeMap::new();
        for (key, (domain, role, label)) in raw.objnames {
            object_types.insert(
                parse_objtype_key(&key)?,
                ObjectType {
                    domain,
                    role,
                    label,
                },
            );
        }
        let mut object_type_tags = BTreeMap::new();
        for (key, tag) in raw.objtypes {
            object_type_tags.insert(parse_objtype_key(&key)?, tag);
        }

        let all_titles = raw
            .alltitles
            .into_iter()
            .map(|(title, locations)| {
                let locations = locations
                    .into_iter()
                    .map(|(doc, anchor)| TitleLocation { doc, anchor })
                    .collect();
                (title, locations)
            })
            .collect();
        let index_entries = raw
            .indexentries
            .into_iter()
            .map(|(entry, locations)| {
                let locations = locations
                    .into_iter()
                    .map(|(doc, anchor, main)| IndexEntryLocation {
                        doc,
                        anchor,
                        is_main: main.is_set(),
                    })
                    .collect();
                (entry, locations)
            })
            .collect();

        Ok(Self {
            docnames: raw.docnames,
            filenames: raw.filenames,
            titles: raw.titles,
            terms,
            title_terms,
            objects,
            object_types,
            object_type_tags,
            all_titles,
            index_entries,
            env_version: raw.envversion,
        })
    }

    /// 从 JSON 值构建索引
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let raw: RawSearchIndex =
            serde_json::from_value(value).map_err(|e| SchemaError::Malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn docnames(&self) -> &[String] {
        &self.docnames
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// 可完整解析的文档数量（三个平行数组的最小长度）
    pub fn document_count(&self) -> usize {
        self.docnames
            .len()
            .min(self.filenames.len())
            .min(self.titles.len())
    }

    pub fn docname(&self, doc: DocId) -> Option<&str> {
        self.docnames.get(doc).map(String::as_str)
    }

    pub fn filename(&self, doc: DocId) -> Option<&str> {
        self.filenames.get(doc).map(String::as_str)
    }

    pub fn title(&self, doc: DocId) -> Option<&str> {
        self.titles.get(doc).map(String::as_str)
    }

    pub fn terms(&self) -> &HashMap<String, Vec<DocId>> {
        &self.terms
    }

    pub fn title_terms(&self) -> &HashMap<String, Vec<DocId>> {
        &self.title_terms
    }

    pub fn term_postings(&self, term: &str) -> Option<&[DocId]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    pub fn title_term_postings(&self, term: &str) -> Option<&[DocId]> {
        self.title_terms.get(term).map(Vec::as_slice)
    }

    pub fn objects(&self) -> &[IndexedObject] {
        &self.objects
    }

    pub fn object_types(&self) -> &BTreeMap<ObjTypeId, ObjectType> {
        &self.object_types
    }

    pub fn object_type(&self, id: ObjTypeId) -> Option<&ObjectType> {
        self.object_types.get(&id)
    }

    pub fn object_type_tags(&self) -> &BTreeMap<ObjTypeId, String> {
        &self.object_type_tags
    }

    pub fn all_titles(&self) -> &[(String, Vec<TitleLocation>)] {
        &self.all_titles
    }

    pub fn index_entries(&self) -> &[(String, Vec<IndexEntryLocation>)] {
        &self.index_entries
    }

    pub fn env_version(&self) -> &BTreeMap<String, Value> {
        &self.env_version
    }
}
