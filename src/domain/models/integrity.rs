// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// 完整性问题类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// `docnames` / `filenames` / `titles` 长度不一致
    CatalogLengthMismatch,
    /// 引用了不存在的文档
    DanglingDocument,
    /// 引用了不存在的对象类型
    UnknownObjectType,
    /// `objtypes` 与 `objnames` 键集合不同
    ObjectTypeLegendMismatch,
    /// 非小写词条，小写查询无法命中
    NonLowercaseTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityIssue {
    pub severity: Severity,
    pub kind: IssueKind,
    pub message: String,
}

/// 完整性校验报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn push(&mut self, severity: Severity, kind: IssueKind, message: impl Into<String>) {
        self.issues.push(IntegrityIssue {
            severity,
            kind,
            message: message.into(),
        });
    }

    /// 没有错误即视为有效；警告不影响
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &IntegrityIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn has_kind(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}
