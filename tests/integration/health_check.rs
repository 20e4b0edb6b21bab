// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use docsearch::application::use_cases::search_use_case::{SearchOptions, SearchUseCase};
use docsearch::infrastructure::repositories::file_index_repo::FileIndexRepository;
use docsearch::presentation::routes;
use std::sync::Arc;
use tower::util::ServiceExt;

use super::helpers::fixture_path;

/// 健康检查测试
///
/// 不经过测试服务器，直接驱动路由服务
#[tokio::test]
async fn health_check_works_without_server() {
    let repository = Arc::new(FileIndexRepository::new(fixture_path()));
    let use_case = SearchUseCase::initialize(repository, SearchOptions::default())
        .await
        .unwrap();
    let app = routes::routes(Arc::new(use_case));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 未知路径返回 404
#[tokio::test]
async fn unknown_route_returns_404() {
    let repository = Arc::new(FileIndexRepository::new(fixture_path()));
    let use_case = SearchUseCase::initialize(repository, SearchOptions::default())
        .await
        .unwrap();
    let app = routes::routes(Arc::new(use_case));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/crawl")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
