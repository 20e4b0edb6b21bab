// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use docsearch::application::use_cases::search_use_case::SearchOptions;
use docsearch::domain::services::link_builder::LinkBuilder;
use serde_json::Value;

use super::helpers::{create_test_app, create_test_app_with_options};

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let app = create_test_app().await;
    let response = app.server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");

    let version = app.server.get("/v1/version").await;
    version.assert_text(env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn search_ranks_exact_object_first() {
    let app = create_test_app().await;
    let response = app
        .server
        .get("/v1/search")
        .add_query_param("q", "RNN")
        .add_query_param("limit", 3)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["query"], "RNN");
    assert_eq!(body["search_terms"], serde_json::json!(["rnn"]));
    assert_eq!(body["total"], 3);
    assert_eq!(body["cached"], false);
    assert_eq!(body["results"][0]["title"], "dsipts.models.RNN");
    assert_eq!(body["results"][0]["kind"], "object");
    assert_eq!(
        body["results"][0]["url"],
        "dsipts.models.html#module-dsipts.models.RNN"
    );
}

#[tokio::test]
async fn search_reports_excluded_and_highlight_terms() {
    let app = create_test_app().await;
    let body: Value = app
        .server
        .get("/v1/search")
        .add_query_param("q", "Training -accuracy")
        .await
        .json();
    assert_eq!(body["search_terms"], serde_json::json!(["train"]));
    assert_eq!(body["excluded_terms"], serde_json::json!(["accuraci"]));
    assert_eq!(body["highlight_terms"], serde_json::json!(["training"]));
    let results = body["results"].as_array().unwrap();
    assert!(results
        .iter()
        .filter(|r| r["kind"] == "text")
        .all(|r| r["docname"] != "dsipts.models"));
}

#[tokio::test]
async fn repeated_search_is_served_from_cache() {
    let app = create_test_app().await;
    let first: Value = app.server.get("/v1/search").add_query_param("q", "model").await.json();
    let second: Value = app.server.get("/v1/search").add_query_param("q", "MODEL").await.json();
    assert_eq!(first["cached"], false);
    assert_eq!(second["cached"], true);
    assert_eq!(first["results"], second["results"]);

    let stats: Value = app.server.get("/v1/index/stats").await.json();
    assert_eq!(stats["cached_queries"], 1);
}

#[tokio::test]
async fn invalid_search_requests_return_400() {
    let app = create_test_app().await;

    let missing = app.server.get("/v1/search").await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = missing.json();
    assert!(body["error"].is_string());

    app.server
        .get("/v1/search")
        .add_query_param("q", "...")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .get("/v1/search")
        .add_query_param("q", "rnn")
        .add_query_param("limit", 0)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .get("/v1/search")
        .add_query_param("q", "rnn")
        .add_query_param("limit", 10_000)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn documents_endpoints() {
    let app = create_test_app().await;

    let list: Value = app.server.get("/v1/documents").await.json();
    assert_eq!(list["total"], 6);
    assert_eq!(list["documents"][3]["docname"], "dsipts.models");

    let doc = app.server.get("/v1/documents/4").await;
    doc.assert_status_ok();
    let doc: Value = doc.json();
    assert_eq!(doc["filename"], "index.rst");
    assert_eq!(doc["url"], "index.html");

    let missing = app.server.get("/v1/documents/99").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = missing.json();
    assert_eq!(body["error"], "Document 99 not found");

    app.server
        .get("/v1/documents/abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn objects_endpoint() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/objects/dsipts.models.RNN.RNN").await;
    response.assert_status_ok();
    let obj: Value = response.json();
    assert_eq!(obj["objtype"], "py:class");
    assert_eq!(obj["label"], "Python class");
    assert_eq!(obj["anchor"], "#dsipts.models.RNN.RNN");
    assert_eq!(obj["title"], "dsipts.models package");

    app.server
        .get("/v1/objects/dsipts.models.Missing")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_and_validation_endpoints() {
    let app = create_test_app().await;

    let stats: Value = app.server.get("/v1/index/stats").await.json();
    assert_eq!(stats["documents"], 6);
    assert_eq!(stats["objects"], 80);
    assert_eq!(stats["objects_by_type"]["py:attribute"], 9);
    assert_eq!(stats["objects_by_type"]["py:function"], 6);

    let report: Value = app.server.get("/v1/index/validate").await.json();
    assert_eq!(report["valid"], true);
    assert_eq!(report["errors"], 0);
    assert_eq!(report["warnings"], 9);
    assert_eq!(report["issues"][0]["kind"], "non_lowercase_term");
}

#[tokio::test]
async fn dirhtml_links() {
    let options = SearchOptions {
        links: LinkBuilder::new("/docs/", "/"),
        ..SearchOptions::default()
    };
    let app = create_test_app_with_options(options).await;

    let index: Value = app.server.get("/v1/documents/4").await.json();
    assert_eq!(index["url"], "/docs/");
    let models: Value = app.server.get("/v1/documents/3").await.json();
    assert_eq!(models["url"], "/docs/dsipts.models/");
}
