// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use docsearch::application::use_cases::search_use_case::{SearchOptions, SearchUseCase};
use docsearch::infrastructure::repositories::file_index_repo::FileIndexRepository;
use docsearch::presentation::routes;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/searchindex.js")
}

pub struct TestApp {
    pub server: TestServer,
    pub index_path: PathBuf,
    // Keep the directory alive for the lifetime of the server
    _dir: TempDir,
}

impl TestApp {
    pub async fn write_index(&self, content: &str) {
        tokio::fs::write(&self.index_path, content).await.unwrap();
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_options(SearchOptions::default()).await
}

pub async fn create_test_app_with_options(options: SearchOptions) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("searchindex.js");
    tokio::fs::copy(fixture_path(), &index_path).await.unwrap();
    let server = build_server(&index_path, options).await;
    TestApp {
        server,
        index_path,
        _dir: dir,
    }
}

async fn build_server(index_path: &Path, options: SearchOptions) -> TestServer {
    let repository = Arc::new(FileIndexRepository::new(index_path));
    let use_case = SearchUseCase::initialize(repository, options)
        .await
        .expect("fixture index loads");
    TestServer::new(routes::routes(Arc::new(use_case))).unwrap()
}
