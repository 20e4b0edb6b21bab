// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    Json,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::search_request::{SearchQueryDto, SearchResponseDto},
        use_cases::search_use_case::{QueryError, SearchUseCase},
    },
    domain::repositories::index_repository::IndexRepository,
    presentation::errors::AppError,
};

/// 处理搜索请求
///
/// # 参数
///
/// * `use_case` - 查询用例实例
/// * `params` - 查询参数 `q` 与可选的 `limit`
///
/// # 错误
///
/// 参数缺失或非法、查询中没有可检索的词、`limit` 超出范围时返回 400
pub async fn search<R>(
    Extension(use_case): Extension<Arc<SearchUseCase<R>>>,
    params: Result<Query<SearchQueryDto>, QueryRejection>,
) -> Result<Json<SearchResponseDto>, AppError>
where
    R: IndexRepository + 'static,
{
    let Query(params) = params.map_err(|e| QueryError::Validation(e.body_text()))?;
    let response = use_case.search(params).await?;
    Ok(Json(response))
}
