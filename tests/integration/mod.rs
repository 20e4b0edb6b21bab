// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP 集成测试
///
/// 通过 `axum-test` 驱动完整路由，索引文件放在临时目录中
pub mod api_tests;
pub mod health_check;
pub mod helpers;
