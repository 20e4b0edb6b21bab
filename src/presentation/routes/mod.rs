// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::search_use_case::SearchUseCase;
use crate::domain::repositories::index_repository::IndexRepository;
use crate::presentation::handlers::{index_handler, search_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `use_case` - 所有处理器共享的查询用例
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<R>(use_case: Arc<SearchUseCase<R>>) -> Router
where
    R: IndexRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let index_routes = Router::new()
        .route("/v1/search", get(search_handler::search::<R>))
        .route("/v1/objects/{fullname}", get(index_handler::get_object::<R>))
        .route("/v1/documents", get(index_handler::list_documents::<R>))
        .route("/v1/documents/{id}", get(index_handler::get_document::<R>))
        .route("/v1/index/stats", get(index_handler::stats::<R>))
        .route("/v1/index/validate", get(index_handler::validate::<R>))
        .route("/v1/index/reload", post(index_handler::reload::<R>));

    Router::new()
        .merge(public_routes)
        .merge(index_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(use_case)),
        )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
