// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

pub const QUERIES_TOTAL: &str = "docsearch_queries_total";
pub const QUERY_CACHE_HITS_TOTAL: &str = "docsearch_query_cache_hits_total";
pub const QUERY_DURATION_SECONDS: &str = "docsearch_query_duration_seconds";
pub const INDEX_RELOADS_TOTAL: &str = "docsearch_index_reloads_total";
pub const INDEX_DOCUMENTS: &str = "docsearch_index_documents";

/// 初始化指标系统
///
/// 安装 Prometheus 记录器并在 `listen_addr` 上暴露抓取端点
pub fn init_metrics(listen_addr: &str) -> Result<()> {
    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("Invalid metrics address '{}'", listen_addr))?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("Failed to install Prometheus recorder")?;

    describe_metrics();
    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

fn describe_metrics() {
    describe_counter!(QUERIES_TOTAL, "Total number of search queries served");
    describe_counter!(
        QUERY_CACHE_HITS_TOTAL,
        "Total number of search queries answered from the query cache"
    );
    describe_histogram!(
        QUERY_DURATION_SECONDS,
        "Duration of uncached search queries in seconds"
    );
    describe_counter!(
        INDEX_RELOADS_TOTAL,
        "Total number of index reload attempts, labelled by outcome"
    );
    describe_gauge!(INDEX_DOCUMENTS, "Number of documents in the active index");
}

/// 记录一次查询
pub fn record_query(cache_hit: bool, duration: Option<Duration>) {
    counter!(QUERIES_TOTAL).increment(1);
    if cache_hit {
        counter!(QUERY_CACHE_HITS_TOTAL).increment(1);
    }
    if let Some(duration) = duration {
        histogram!(QUERY_DURATION_SECONDS).record(duration.as_secs_f64());
    }
}

/// 记录一次索引加载，`outcome` 为 `success` 或失败原因
pub fn record_reload(outcome: &'static str) {
    counter!(INDEX_RELOADS_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_index_size(documents: usize) {
    gauge!(INDEX_DOCUMENTS).set(documents as f64);
}
