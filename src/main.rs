// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use docsearch::application::use_cases::search_use_case::{SearchOptions, SearchUseCase};
use docsearch::config::settings::Settings;
use docsearch::domain::services::link_builder::LinkBuilder;
use docsearch::infrastructure::metrics;
use docsearch::infrastructure::repositories::file_index_repo::FileIndexRepository;
use docsearch::presentation::routes;
use docsearch::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责加载配置与索引并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(settings.logging.format);
    info!("Starting docsearch...");

    // 3. Initialize Prometheus metrics
    if settings.metrics.enabled {
        if let Err(e) = metrics::init_metrics(&settings.metrics.listen_addr) {
            warn!("Metrics disabled: {:#}", e);
        }
    }

    // 4. Load the index
    let repository = Arc::new(FileIndexRepository::new(&settings.index.path));
    let options = SearchOptions {
        links: LinkBuilder::new(
            settings.index.url_root.clone(),
            settings.index.link_suffix.clone(),
        ),
        default_limit: settings.search.default_limit,
        max_limit: settings.search.max_limit,
        cache_capacity: settings.search.cache_capacity,
        strict: settings.index.strict,
    };
    let use_case = Arc::new(SearchUseCase::initialize(repository, options).await?);
    info!("Index loaded from {}", settings.index.path);

    // 5. Start HTTP server
    let app = routes::routes(use_case);
    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
