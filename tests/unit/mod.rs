// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use docsearch::domain::models::search_index::SearchIndex;
use docsearch::infrastructure::loader::parse_search_index;
use std::path::PathBuf;

mod domain;
mod infrastructure;

/// 随仓库提供的真实 Sphinx 索引（dsipts 文档）
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/searchindex.js")
}

pub fn load_fixture() -> SearchIndex {
    let content = std::fs::read_to_string(fixture_path()).expect("fixture is readable");
    parse_search_index(&content).expect("fixture parses")
}
