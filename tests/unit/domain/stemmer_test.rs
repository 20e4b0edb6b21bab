// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use docsearch::domain::services::stemmer::stem;

use crate::unit::load_fixture;

/// 查询词干与索引生成器写入的词条一致
#[test]
fn test_stems_match_generated_terms() {
    let index = load_fixture();
    let cases = [
        ("accuracy", "accuraci"),
        ("attention", "attent"),
        ("generate", "gener"),
        ("categorical", "categor"),
        ("timeseries", "timeseri"),
        ("training", "train"),
        ("models", "model"),
        ("predict", "predict"),
        ("losses", "loss"),
    ];
    for (word, expected) in cases {
        assert_eq!(stem(word), expected, "stem of {}", word);
        assert!(
            index.term_postings(expected).is_some(),
            "term '{}' missing from index",
            expected
        );
    }
}

#[test]
fn test_stems_match_generated_title_terms() {
    let index = load_fixture();
    for (word, expected) in [
        ("packages", "packag"),
        ("modules", "modul"),
        ("welcome", "welcom"),
        ("indices", "indic"),
        ("subpackages", "subpackag"),
        ("documentation", "document"),
    ] {
        assert_eq!(stem(word), expected, "stem of {}", word);
        assert!(index.title_term_postings(expected).is_some());
    }
}
