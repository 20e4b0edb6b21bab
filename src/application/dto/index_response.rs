// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::catalog::{DocumentInfo, IndexStats};
use crate::domain::models::integrity::IntegrityReport;

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentListDto {
    pub total: usize,
    pub documents: Vec<DocumentInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStatsDto {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub cached_queries: usize,
    #[serde(flatten)]
    pub stats: IndexStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReportDto {
    pub valid: bool,
    pub errors: usize,
    pub warnings: usize,
    #[serde(flatten)]
    pub report: IntegrityReport,
}

impl From<IntegrityReport> for ValidationReportDto {
    fn from(report: IntegrityReport) -> Self {
        Self {
            valid: report.is_valid(),
            errors: report.error_count(),
            warnings: report.warning_count(),
            report,
        }
    }
}

/// 重新加载结果
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadSummaryDto {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub documents: usize,
    pub errors: usize,
    pub warnings: usize,
}
