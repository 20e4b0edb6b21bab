// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 文档链接构造
///
/// `url = url_root + docname + link_suffix + anchor`；
/// `link_suffix` 为 `/` 时（dirhtml 构建）`index` 文档映射为目录本身
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    url_root: String,
    link_suffix: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new("", ".html")
    }
}

impl LinkBuilder {
    pub fn new(url_root: impl Into<String>, link_suffix: impl Into<String>) -> Self {
        Self {
            url_root: url_root.into(),
            link_suffix: link_suffix.into(),
        }
    }

    /// `anchor` 为空或以 `#` 开头
    pub fn url(&self, docname: &str, anchor: &str) -> String {
        let path = if self.link_suffix == "/" {
            if docname == "index" {
                String::new()
            } else if let Some(dir) = docname.strip_suffix("/index") {
                format!("{}/", dir)
            } else {
                format!("{}/", docname)
            }
        } else {
            format!("{}{}", docname, self.link_suffix)
        };
        format!("{}{}{}", self.url_root, path, anchor)
    }
}
