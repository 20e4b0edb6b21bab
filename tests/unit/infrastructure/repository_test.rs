// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use docsearch::domain::repositories::index_repository::{IndexLoadError, IndexRepository};
use docsearch::infrastructure::repositories::file_index_repo::FileIndexRepository;

use crate::unit::fixture_path;

#[tokio::test]
async fn test_load_generated_index_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("searchindex.js");
    tokio::fs::copy(fixture_path(), &path).await.unwrap();

    let repo = FileIndexRepository::new(&path);
    let index = repo.load().await.unwrap();
    assert_eq!(index.document_count(), 6);
    assert_eq!(index.objects().len(), 80);
    assert_eq!(repo.path(), path.as_path());
}

#[tokio::test]
async fn test_each_load_rereads_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("searchindex.js");
    tokio::fs::write(
        &path,
        r#"Search.setIndex({docnames:["a"],filenames:["a.rst"],titles:["A"]})"#,
    )
    .await
    .unwrap();

    let repo = FileIndexRepository::new(&path);
    assert_eq!(repo.load().await.unwrap().document_count(), 1);

    tokio::fs::write(&path, "Search.setIndex({docnames:[").await.unwrap();
    assert!(matches!(repo.load().await, Err(IndexLoadError::Parse(_))));
}
