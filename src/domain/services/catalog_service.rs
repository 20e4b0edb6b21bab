// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use super::link_builder::LinkBuilder;
use crate::domain::models::catalog::{DocumentInfo, IndexStats, ObjectInfo};
use crate::domain::models::search_index::{DocId, IndexedObject, SearchIndex};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Document {0} not found")]
    DocumentNotFound(DocId),
    #[error("Object '{0}' not found")]
    ObjectNotFound(String),
}

/// 文档与对象目录查询
pub struct CatalogService {
    index: Arc<SearchIndex>,
    links: LinkBuilder,
}

impl CatalogService {
    pub fn new(index: Arc<SearchIndex>, links: LinkBuilder) -> Self {
        Self { index, links }
    }

    pub fn document(&self, id: DocId) -> Result<DocumentInfo, CatalogError> {
        let index = &*self.index;
        match (index.docname(id), index.filename(id), index.title(id)) {
            (Some(docname), Some(filename), Some(title)) => Ok(DocumentInfo {
                id,
                docname: docname.to_string(),
                filename: filename.to_string(),
                title: title.to_string(),
                url: self.links.url(docname, ""),
            }),
            _ => Err(CatalogError::DocumentNotFound(id)),
        }
    }

    pub fn documents(&self) -> Vec<DocumentInfo> {
        (0..self.index.document_count())
            .filter_map(|id| self.document(id).ok())
            .collect()
    }

    /// 按全名查找对象；全名区分大小写，找不到时再做一次不区分大小写的匹配
    pub fn object(&self, fullname: &str) -> Result<ObjectInfo, CatalogError> {
        let objects = self.index.objects();
        let found = objects
            .iter()
            .find(|o| o.fullname == fullname)
            .or_else(|| {
                let lower = fullname.to_lowercase();
                objects.iter().find(|o| o.fullname_lower == lower)
            })
            .ok_or_else(|| CatalogError::ObjectNotFound(fullname.to_string()))?;
        self.describe(found)
            .ok_or_else(|| CatalogError::ObjectNotFound(fullname.to_string()))
    }

    fn describe(&self, obj: &IndexedObject) -> Option<ObjectInfo> {
        let index = &*self.index;
        let docname = index.docname(obj.doc)?;
        let title = index.title(obj.doc)?;
        let objtype = index.object_type(obj.objtype);
        let anchor = format!("#{}", obj.resolve_anchor(objtype));

        Some(ObjectInfo {
            fullname: obj.fullname.clone(),
            prefix: obj.prefix.clone(),
            name: obj.name.clone(),
            objtype: index.object_type_tags().get(&obj.objtype).cloned(),
            label: objtype.map(|t| t.label.clone()),
            priority: obj.priority,
            docname: docname.to_string(),
            title: title.to_string(),
            url: self.links.url(docname, &anchor),
            anchor,
        })
    }

    pub fn stats(&self) -> IndexStats {
        let index = &*self.index;
        let mut objects_by_type: BTreeMap<String, usize> = BTreeMap::new();
        for obj in index.objects() {
            let tag = index
                .object_type_tags()
                .get(&obj.objtype)
                .cloned()
                .unwrap_or_else(|| format!("unknown:{}", obj.objtype));
            *objects_by_type.entry(tag).or_default() += 1;
        }

        IndexStats {
            documents: index.document_count(),
            terms: index.terms().len(),
            title_terms: index.title_terms().len(),
            objects: index.objects().len(),
            objects_by_type,
            all_titles: index.all_titles().len(),
            index_entries: index.index_entries().len(),
        }
    }
}
