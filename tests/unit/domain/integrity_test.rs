// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use docsearch::domain::models::integrity::{IntegrityReport, IssueKind, Severity};
use docsearch::domain::services::integrity_service::IntegrityValidator;
use docsearch::infrastructure::loader::parse_search_index;

use crate::unit::{fixture_path, load_fixture};

fn validate_patched(from: &str, to: &str) -> IntegrityReport {
    let content = std::fs::read_to_string(fixture_path()).unwrap();
    assert!(content.contains(from), "fixture lacks '{}'", from);
    let index = parse_search_index(&content.replacen(from, to, 1)).unwrap();
    IntegrityValidator::validate(&index)
}

/// 真实索引：引用全部可解析，只有首字母大写的停用词词条产生警告
#[test]
fn test_generated_index_is_consistent() {
    let index = load_fixture();
    let report = IntegrityValidator::validate(&index);
    assert!(report.is_valid());
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 9);
    assert!(report
        .issues
        .iter()
        .all(|i| i.kind == IssueKind::NonLowercaseTerm && i.severity == Severity::Warning));
    assert!(report.issues.iter().any(|i| i.message.contains("'The'")));
}

#[test]
fn test_object_pointing_past_catalog() {
    let report = validate_patched(
        r#""dsipts.models.RNN":[[3,1,1,"","RNN"]]"#,
        r#""dsipts.models.RNN":[[9,1,1,"","RNN"]]"#,
    );
    assert!(!report.is_valid());
    assert_eq!(report.error_count(), 1);
    assert!(report.has_kind(IssueKind::DanglingDocument));
    assert!(report.issues.iter().any(|i| i.message.contains("dsipts.models.RNN.RNN")));
}

#[test]
fn test_missing_object_type_tag() {
    let report = validate_patched(r#","4":"py:attribute""#, "");
    assert!(report.has_kind(IssueKind::ObjectTypeLegendMismatch));
    assert!(report.has_kind(IssueKind::UnknownObjectType));
    // one legend mismatch plus one error per attribute object
    assert_eq!(report.error_count(), 10);
}

#[test]
fn test_truncated_title_catalog() {
    let report = validate_patched(r#"documentation!","dsipts"]"#, r#"documentation!"]"#);
    assert!(report.has_kind(IssueKind::CatalogLengthMismatch));
    assert!(report.has_kind(IssueKind::DanglingDocument));
}
