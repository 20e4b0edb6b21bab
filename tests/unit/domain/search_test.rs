// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use docsearch::domain::models::search_result::ResultKind;
use docsearch::domain::services::catalog_service::CatalogService;
use docsearch::domain::services::link_builder::LinkBuilder;
use docsearch::domain::services::query_parser::ParsedQuery;
use docsearch::domain::services::search_service::SearchService;
use std::sync::Arc;

use crate::unit::load_fixture;

fn service() -> SearchService {
    SearchService::new(Arc::new(load_fixture()), LinkBuilder::new("/", ".html"))
}

#[test]
fn test_exact_module_name_ranks_first() {
    let results = service().search(&ParsedQuery::parse("RNN"), 10);
    let top = &results[0];
    assert_eq!(top.kind, ResultKind::Object);
    assert_eq!(top.title, "dsipts.models.RNN");
    assert_eq!(top.anchor, "#module-dsipts.models.RNN");
    assert_eq!(top.url, "/dsipts.models.html#module-dsipts.models.RNN");
    assert_eq!(top.score, 26);
    assert_eq!(
        top.description.as_deref(),
        Some("Python module, in dsipts.models package")
    );

    // the class of the same name follows, then the method
    assert_eq!(results[1].title, "dsipts.models.RNN.RNN");
    assert_eq!(results[1].score, 16);
}

#[test]
fn test_partial_object_name() {
    let results = service().perform_object_search("moving", &["moving".to_string()]);
    assert_eq!(results.len(), 2);
    let class = results
        .iter()
        .find(|r| r.title == "dsipts.models.LinearTS.moving_avg")
        .unwrap();
    // partial match on the last component plus class priority
    assert_eq!(class.score, 6 + 5);
    // the method only matches through its prefix
    let method = results
        .iter()
        .find(|r| r.title == "dsipts.models.LinearTS.moving_avg.forward")
        .unwrap();
    assert_eq!(method.score, 5);
}

#[test]
fn test_title_terms_outrank_body_terms() {
    let results = service().perform_terms_search(&ParsedQuery::parse("models"));
    let models_doc = results.iter().find(|r| r.docname == "dsipts.models").unwrap();
    let other = results.iter().find(|r| r.docname == "dsipts").unwrap();
    assert_eq!(models_doc.score, 15);
    assert_eq!(other.score, 5);
}

#[test]
fn test_multi_term_query_requires_all_terms() {
    let service = service();
    let training = service.perform_terms_search(&ParsedQuery::parse("training"));
    let combined = service.perform_terms_search(&ParsedQuery::parse("training accuracy"));
    assert!(combined.len() <= training.len());
    assert!(combined.iter().all(|r| r.docname == "dsipts.models"));
}

#[test]
fn test_excluded_term_removes_documents() {
    let service = service();
    let with = service.perform_terms_search(&ParsedQuery::parse("training"));
    assert!(with.iter().any(|r| r.docname == "dsipts.models"));

    let without = service.perform_terms_search(&ParsedQuery::parse("training -accuracy"));
    assert!(without.iter().all(|r| r.docname != "dsipts.models"));
    assert!(without.iter().any(|r| r.docname == "dsipts.data_structure"));
}

#[test]
fn test_results_are_unique_and_limited() {
    let results = service().search(&ParsedQuery::parse("dsipts"), 5);
    assert_eq!(results.len(), 5);
    for (i, a) in results.iter().enumerate() {
        for b in &results[i + 1..] {
            assert_ne!(a.dedup_key(), b.dedup_key());
        }
        if i > 0 {
            assert!(results[i - 1].score >= a.score);
        }
    }
}

#[test]
fn test_catalog_over_generated_index() {
    let catalog = CatalogService::new(Arc::new(load_fixture()), LinkBuilder::default());
    let stats = catalog.stats();
    assert_eq!(stats.documents, 6);
    assert_eq!(stats.objects, 80);
    assert_eq!(stats.objects_by_type.get("py:method"), Some(&37));
    assert_eq!(stats.objects_by_type.get("py:class"), Some(&15));
    assert_eq!(stats.objects_by_type.get("py:module"), Some(&13));
    assert_eq!(stats.title_terms, 21);

    let doc = catalog.document(4).unwrap();
    assert_eq!(doc.docname, "index");
    assert_eq!(doc.filename, "index.rst");
    assert_eq!(doc.title, "Welcome to DSIPTS\u{2019}s documentation!");

    let obj = catalog.object("dsipts.data_structure.data_structure.TimeSeries").unwrap();
    assert_eq!(obj.objtype.as_deref(), Some("py:class"));
    assert_eq!(obj.docname, "dsipts.data_structure");
}
