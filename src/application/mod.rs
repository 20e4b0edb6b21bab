// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含应用程序的用例实现与数据传输对象
/// 用例组合领域服务与基础设施，处理器只依赖用例
pub mod dto;
pub mod use_cases;
