// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::domain::models::search_index::SearchIndex;
use crate::domain::repositories::index_repository::{IndexLoadError, IndexRepository};
use crate::infrastructure::loader::parse_search_index;

/// 本地文件索引仓库
///
/// 从 Sphinx 构建目录中的 `searchindex.js` 读取索引
pub struct FileIndexRepository {
    path: PathBuf,
}

impl FileIndexRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl IndexRepository for FileIndexRepository {
    async fn load(&self) -> Result<SearchIndex, IndexLoadError> {
        debug!("Reading search index from {}", self.path.display());
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| IndexLoadError::Io {
                path: self.source(),
                source,
            })?;

        let index = parse_search_index(&content)?;
        info!(
            path = %self.path.display(),
            bytes = content.len(),
            documents = index.document_count(),
            "Loaded search index"
        );
        Ok(index)
    }

    fn source(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}
