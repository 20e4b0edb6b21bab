// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

/// 应用程序配置设置
///
/// 包含服务器、索引、查询、指标与日志等所有配置项
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 索引配置
    pub index: IndexSettings,
    /// 查询配置
    #[validate(nested)]
    pub search: SearchSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 索引配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct IndexSettings {
    /// `searchindex.js` 路径
    pub path: String,
    /// 生成链接时的前缀
    pub url_root: String,
    /// 生成链接时的后缀，`dirhtml` 构建使用 `/`
    pub link_suffix: String,
    /// 为 true 时拒绝带有完整性错误的索引
    pub strict: bool,
}

/// 查询配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchSettings {
    /// 未指定 `limit` 时返回的结果数
    #[validate(range(min = 1))]
    pub default_limit: usize,
    /// `limit` 的上限
    #[validate(range(min = 1))]
    pub max_limit: usize,
    /// 查询缓存容量，0 表示关闭
    pub cache_capacity: usize,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    pub listen_addr: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub format: LogFormat,
}

/// 未设置 `APP_ENVIRONMENT` 时使用的环境名
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// 按叠加顺序列出要读取的配置文件（不含扩展名）
fn config_files(env: &str) -> Vec<String> {
    let mut files = vec!["config/default".to_string()];
    if env != "default" {
        files.push(format!("config/{}", env));
    }
    files
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `DOCSEARCH__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        let builder = config_files(&env)
            .into_iter()
            .fold(Self::defaults()?, |builder, name| {
                builder.add_source(File::with_name(&name).required(false))
            })
            .add_source(Environment::with_prefix("DOCSEARCH").separator("__"));

        Self::finish(builder)
    }

    /// 在默认值之上叠加一段 TOML
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("index.path", "docs/_build/html/searchindex.js")?
            .set_default("index.url_root", "")?
            .set_default("index.link_suffix", ".html")?
            .set_default("index.strict", true)?
            .set_default("search.default_limit", 50)?
            .set_default("search.max_limit", 500)?
            .set_default("search.cache_capacity", 256)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .set_default("logging.format", "text")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.check()?;
        Ok(settings)
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.validate()
            .map_err(|e| ConfigError::Message(format!("invalid settings: {}", e)))?;
        if self.search.default_limit > self.search.max_limit {
            return Err(ConfigError::Message(format!(
                "search.default_limit ({}) exceeds search.max_limit ({})",
                self.search.default_limit, self.search.max_limit
            )));
        }
        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
