// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeSet;

use crate::domain::models::integrity::{IntegrityReport, IssueKind, Severity};
use crate::domain::models::search_index::{DocId, SearchIndex};

/// 索引完整性校验
///
/// 只报告问题，不修改索引；是否拒绝服务由调用方根据 [`IntegrityReport::is_valid`] 决定
pub struct IntegrityValidator<'a> {
    index: &'a SearchIndex,
    report: IntegrityReport,
}

impl<'a> IntegrityValidator<'a> {
    pub fn validate(index: &'a SearchIndex) -> IntegrityReport {
        let mut validator = Self {
            index,
            report: IntegrityReport::default(),
        };
        validator.check_catalog_lengths();
        validator.check_postings();
        validator.check_objects();
        validator.check_object_type_legend();
        validator.check_titles_and_entries();
        validator.check_term_case();
        validator.report
    }

    fn doc_is_valid(&self, doc: DocId) -> bool {
        doc < self.index.document_count()
    }

    fn check_catalog_lengths(&mut self) {
        let (docnames, filenames, titles) = (
            self.index.docnames().len(),
            self.index.filenames().len(),
            self.index.titles().len(),
        );
        if docnames != filenames || docnames != titles {
            self.report.push(
                Severity::Error,
                IssueKind::CatalogLengthMismatch,
                format!(
                    "catalog arrays differ in length: docnames={}, filenames={}, titles={}",
                    docnames, filenames, titles
                ),
            );
        }
    }

    fn check_postings(&mut self) {
        let index = self.index;
        for (source, map) in [("terms", index.terms()), ("titleterms", index.title_terms())] {
            let mut terms: Vec<_> = map.iter().collect();
            terms.sort_by(|a, b| a.0.cmp(b.0));
            for (term, docs) in terms {
                for &doc in docs {
                    if !self.doc_is_valid(doc) {
                        self.report.push(
                            Severity::Error,
                            IssueKind::DanglingDocument,
                            format!("{} entry '{}' references unknown document {}", source, term, doc),
                        );
                    }
                }
            }
        }
    }

    fn check_objects(&mut self) {
        let index = self.index;
        for obj in index.objects() {
            if !self.doc_is_valid(obj.doc) {
                self.report.push(
                    Severity::Error,
                    IssueKind::DanglingDocument,
                    format!("object '{}' references unknown document {}", obj.fullname, obj.doc),
                );
            }
            if index.object_type(obj.objtype).is_none()
                || !index.object_type_tags().contains_key(&obj.objtype)
            {
                self.report.push(
                    Severity::Error,
                    IssueKind::UnknownObjectType,
                    format!(
                        "object '{}' references unknown object type {}",
                        obj.fullname, obj.objtype
                    ),
                );
            }
        }
    }

    fn check_object_type_legend(&mut self) {
        let names: BTreeSet<_> = self.index.object_types().keys().collect();
        let tags: BTreeSet<_> = self.index.object_type_tags().keys().collect();
        if names != tags {
            let only_names: Vec<String> = names.difference(&tags).map(|k| k.to_string()).collect();
            let only_tags: Vec<String> = tags.difference(&names).map(|k| k.to_string()).collect();
            self.report.push(
                Severity::Error,
                IssueKind::ObjectTypeLegendMismatch,
                format!(
                    "objnames/objtypes keys differ: only in objnames [{}], only in objtypes [{}]",
                    only_names.join(", "),
                    only_tags.join(", ")
                ),
            );
        }
    }

    fn check_titles_and_entries(&mut self) {
        let index = self.index;
        for (title, locations) in index.all_titles() {
            for location in locations {
                if !self.doc_is_valid(location.doc) {
                    self.report.push(
                        Severity::Error,
                        IssueKind::DanglingDocument,
                        format!("title '{}' references unknown document {}", title, location.doc),
                    );
                }
            }
        }
        for (entry, locations) in index.index_entries() {
            for location in locations {
                if !self.doc_is_valid(location.doc) {
                    self.report.push(
                        Severity::Error,
                        IssueKind::DanglingDocument,
                        format!(
                            "index entry '{}' references unknown document {}",
                            entry, location.doc
                        ),
                    );
                }
            }
        }
    }

    fn check_term_case(&mut self) {
        let index = self.index;
        for (source, map) in [("terms", index.terms()), ("titleterms", index.title_terms())] {
            let mut unreachable: Vec<&String> = map
                .keys()
                .filter(|term| term.to_lowercase() != **term)
                .collect();
            unreachable.sort();
            for term in unreachable {
                self.report.push(
                    Severity::Warning,
                    IssueKind::NonLowercaseTerm,
                    format!("{} entry '{}' is not lowercase and cannot be matched", source, term),
                );
            }
        }
    }
}
