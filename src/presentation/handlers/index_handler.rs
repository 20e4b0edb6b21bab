// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::PathRejection, Extension, Path},
    Json,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::index_response::{
            DocumentListDto, IndexStatsDto, ReloadSummaryDto, ValidationReportDto,
        },
        use_cases::search_use_case::{QueryError, SearchUseCase},
    },
    domain::{
        models::{
            catalog::{DocumentInfo, ObjectInfo},
            search_index::DocId,
        },
        repositories::index_repository::IndexRepository,
    },
    presentation::errors::AppError,
};

/// 文档目录
pub async fn list_documents<R>(
    Extension(use_case): Extension<Arc<SearchUseCase<R>>>,
) -> Json<DocumentListDto>
where
    R: IndexRepository + 'static,
{
    Json(use_case.documents().await)
}

/// 按编号获取文档，未知编号返回 404
pub async fn get_document<R>(
    Extension(use_case): Extension<Arc<SearchUseCase<R>>>,
    id: Result<Path<DocId>, PathRejection>,
) -> Result<Json<DocumentInfo>, AppError>
where
    R: IndexRepository + 'static,
{
    let Path(id) = id.map_err(|e| QueryError::Validation(e.body_text()))?;
    Ok(Json(use_case.document(id).await?))
}

/// 按全名获取对象，未知对象返回 404
pub async fn get_object<R>(
    Extension(use_case): Extension<Arc<SearchUseCase<R>>>,
    Path(fullname): Path<String>,
) -> Result<Json<ObjectInfo>, AppError>
where
    R: IndexRepository + 'static,
{
    Ok(Json(use_case.object(&fullname).await?))
}

pub async fn stats<R>(Extension(use_case): Extension<Arc<SearchUseCase<R>>>) -> Json<IndexStatsDto>
where
    R: IndexRepository + 'static,
{
    Json(use_case.stats().await)
}

pub async fn validate<R>(
    Extension(use_case): Extension<Arc<SearchUseCase<R>>>,
) -> Json<ValidationReportDto>
where
    R: IndexRepository + 'static,
{
    Json(use_case.validate().await)
}

/// 从磁盘重新加载索引
///
/// # 错误
///
/// - 严格模式下新索引未通过完整性校验时返回 422，旧索引继续服务
/// - 读取或解析失败时返回 500
pub async fn reload<R>(
    Extension(use_case): Extension<Arc<SearchUseCase<R>>>,
) -> Result<Json<ReloadSummaryDto>, AppError>
where
    R: IndexRepository + 'static,
{
    Ok(Json(use_case.reload().await?))
}
