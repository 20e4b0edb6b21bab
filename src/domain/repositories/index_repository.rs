// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::search_index::{SchemaError, SearchIndex};

/// 索引载入错误类型
#[derive(Error, Debug)]
pub enum IndexLoadError {
    /// IO错误
    #[error("IO error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 载荷不是合法的 JavaScript 对象字面量
    #[error("Parse error: {0}")]
    Parse(String),
    /// 载荷结构不符合索引格式
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// 索引仓库特质
///
/// 定义索引的读取接口；每次调用都重新读取来源，供启动与热加载使用
#[async_trait]
pub trait IndexRepository: Send + Sync {
    /// 读取并解析完整索引
    async fn load(&self) -> Result<SearchIndex, IndexLoadError>;

    /// 来源描述，用于日志与统计
    fn source(&self) -> String;
}
