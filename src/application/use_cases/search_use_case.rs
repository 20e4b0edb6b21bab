// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::{
    application::dto::{
        index_response::{DocumentListDto, IndexStatsDto, ReloadSummaryDto, ValidationReportDto},
        search_request::{SearchQueryDto, SearchResponseDto},
    },
    domain::{
        models::{
            catalog::{DocumentInfo, ObjectInfo},
            integrity::IntegrityReport,
            search_index::{DocId, SearchIndex},
        },
        repositories::index_repository::{IndexLoadError, IndexRepository},
        services::{
            catalog_service::{CatalogError, CatalogService},
            integrity_service::IntegrityValidator,
            link_builder::LinkBuilder,
            query_parser::ParsedQuery,
            search_service::SearchService,
        },
    },
    infrastructure::{cache::query_cache::QueryCache, metrics},
};

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Query contains no searchable words")]
    EmptyQuery,
    #[error("Limit {limit} is out of range (1..={max})")]
    LimitOutOfRange { limit: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ReloadError {
    #[error("Failed to load index: {0}")]
    Load(#[from] IndexLoadError),
    #[error("Index failed integrity validation with {errors} error(s): {first}")]
    Invalid {
        errors: usize,
        first: String,
        report: IntegrityReport,
    },
}

/// 查询用例的运行参数
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub links: LinkBuilder,
    pub default_limit: usize,
    pub max_limit: usize,
    pub cache_capacity: usize,
    /// 为 true 时拒绝带有完整性错误的索引
    pub strict: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            links: LinkBuilder::default(),
            default_limit: 50,
            max_limit: 500,
            cache_capacity: 256,
            strict: true,
        }
    }
}

/// 一次加载得到的索引快照
///
/// 查询缓存随快照一起替换，重新加载后旧结果不会再被命中
pub struct IndexSnapshot {
    pub index: Arc<SearchIndex>,
    pub report: IntegrityReport,
    pub loaded_at: DateTime<Utc>,
    pub source: String,
    cache: QueryCache,
}

/// 索引查询用例
///
/// 持有当前索引快照；查询在开始时取得快照，不受并发的重新加载影响
pub struct SearchUseCase<R> {
    repository: Arc<R>,
    snapshot: RwLock<Arc<IndexSnapshot>>,
    options: SearchOptions,
}

impl<R> SearchUseCase<R>
where
    R: IndexRepository + 'static,
{
    /// 首次加载索引并创建用例
    pub async fn initialize(repository: Arc<R>, options: SearchOptions) -> Result<Self, ReloadError> {
        let snapshot = Self::load_snapshot(&repository, &options).await?;
        Ok(Self {
            repository,
            snapshot: RwLock::new(Arc::new(snapshot)),
            options,
        })
    }

    async fn load_snapshot(
        repository: &Arc<R>,
        options: &SearchOptions,
    ) -> Result<IndexSnapshot, ReloadError> {
        let source = repository.source();
        let index = match repository.load().await {
            Ok(index) => index,
            Err(e) => {
                metrics::record_reload("load_error");
                return Err(e.into());
            }
        };

        let report = IntegrityValidator::validate(&index);
        if !report.is_valid() {
            for issue in report.errors() {
                error!(kind = ?issue.kind, "{}", issue.message);
            }
            if options.strict {
                metrics::record_reload("invalid");
                let first = report
                    .errors()
                    .next()
                    .map(|i| i.message.clone())
                    .unwrap_or_default();
                return Err(ReloadError::Invalid {
                    errors: report.error_count(),
                    first,
                    report,
                });
            }
            warn!(
                errors = report.error_count(),
                "Serving index with integrity errors because strict mode is off"
            );
        }
        if report.warning_count() > 0 {
            warn!(
                warnings = report.warning_count(),
                "Index has integrity warnings"
            );
        }

        metrics::record_reload("success");
        metrics::record_index_size(index.document_count());
        info!(
            source = %source,
            documents = index.document_count(),
            objects = index.objects().len(),
            "Index snapshot ready"
        );

        Ok(IndexSnapshot {
            index: Arc::new(index),
            report,
            loaded_at: Utc::now(),
            source,
            cache: QueryCache::new(options.cache_capacity),
        })
    }

    /// 当前快照
    pub async fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.read().await.clone()
    }

    fn catalog(&self, snapshot: &IndexSnapshot) -> CatalogService {
        CatalogService::new(snapshot.index.clone(), self.options.links.clone())
    }

    pub async fn search(&self, dto: SearchQueryDto) -> Result<SearchResponseDto, QueryError> {
        dto.validate()
            .map_err(|e| QueryError::Validation(e.to_string()))?;

        let limit = dto.limit.unwrap_or(self.options.default_limit);
        if limit == 0 || limit > self.options.max_limit {
            return Err(QueryError::LimitOutOfRange {
                limit,
                max: self.options.max_limit,
            });
        }

        let parsed = ParsedQuery::parse(&dto.q);
        if parsed.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let snapshot = self.snapshot().await;
        let key = parsed.normalized();
        let (results, cached) = match snapshot.cache.get(&key, limit) {
            Some(hit) => {
                metrics::record_query(true, None);
                debug!(query = %key, limit, "Query cache hit");
                (hit, true)
            }
            None => {
                let started = Instant::now();
                let service = SearchService::new(snapshot.index.clone(), self.options.links.clone());
                let results = Arc::new(service.search(&parsed, limit));
                snapshot.cache.insert(key, limit, results.clone());
                metrics::record_query(false, Some(started.elapsed()));
                (results, false)
            }
        };

        Ok(SearchResponseDto {
            query: parsed.raw,
            search_terms: parsed.search_terms,
            excluded_terms: parsed.excluded_terms,
            highlight_terms: parsed.highlight_terms,
            total: results.len(),
            cached,
            results: results.as_ref().clone(),
        })
    }

    /// 从仓库重新加载索引并原子替换当前快照
    ///
    /// 失败时保留旧快照
    pub async fn reload(&self) -> Result<ReloadSummaryDto, ReloadError> {
        info!("Reloading index from {}", self.repository.source());
        let snapshot = Arc::new(Self::load_snapshot(&self.repository, &self.options).await?);
        let summary = ReloadSummaryDto {
            source: snapshot.source.clone(),
            loaded_at: snapshot.loaded_at,
            documents: snapshot.index.document_count(),
            errors: snapshot.report.error_count(),
            warnings: snapshot.report.warning_count(),
        };
        *self.snapshot.write().await = snapshot;
        Ok(summary)
    }

    pub async fn document(&self, id: DocId) -> Result<DocumentInfo, CatalogError> {
        let snapshot = self.snapshot().await;
        self.catalog(&snapshot).document(id)
    }

    pub async fn documents(&self) -> DocumentListDto {
        let snapshot = self.snapshot().await;
        let documents = self.catalog(&snapshot).documents();
        DocumentListDto {
            total: documents.len(),
            documents,
        }
    }

    pub async fn object(&self, fullname: &str) -> Result<ObjectInfo, CatalogError> {
        let snapshot = self.snapshot().await;
        self.catalog(&snapshot).object(fullname)
    }

    pub async fn stats(&self) -> IndexStatsDto {
        let snapshot = self.snapshot().await;
        IndexStatsDto {
            source: snapshot.source.clone(),
            loaded_at: snapshot.loaded_at,
            cached_queries: snapshot.cache.entry_count(),
            stats: self.catalog(&snapshot).stats(),
        }
    }

    /// 当前快照的完整性报告
    pub async fn validate(&self) -> ValidationReportDto {
        self.snapshot().await.report.clone().into()
    }
}
