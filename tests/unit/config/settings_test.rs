// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use docsearch::config::settings::{LogFormat, Settings};

/// 环境变量覆盖文件与默认值
#[test]
fn test_environment_overrides_defaults() {
    std::env::set_var("DOCSEARCH__SEARCH__DEFAULT_LIMIT", "20");
    std::env::set_var("DOCSEARCH__SEARCH__MAX_LIMIT", "40");
    std::env::set_var("DOCSEARCH__INDEX__STRICT", "false");

    let settings = Settings::new();

    std::env::remove_var("DOCSEARCH__SEARCH__DEFAULT_LIMIT");
    std::env::remove_var("DOCSEARCH__SEARCH__MAX_LIMIT");
    std::env::remove_var("DOCSEARCH__INDEX__STRICT");

    let settings = settings.expect("settings load");
    assert_eq!(settings.search.default_limit, 20);
    assert_eq!(settings.search.max_limit, 40);
    assert!(!settings.index.strict);
    // untouched keys keep their defaults
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.index.link_suffix, ".html");
    assert_eq!(settings.logging.format, LogFormat::Text);
}

#[test]
fn test_dirhtml_layout() {
    let settings = Settings::from_toml(
        r#"
        [index]
        path = "build/dirhtml/searchindex.js"
        url_root = "https://docs.example/"
        link_suffix = "/"
        "#,
    )
    .unwrap();
    assert_eq!(settings.index.path, "build/dirhtml/searchindex.js");
    assert_eq!(settings.index.url_root, "https://docs.example/");
    assert_eq!(settings.index.link_suffix, "/");
    assert!(settings.index.strict);
}
