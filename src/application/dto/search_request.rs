// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::search_result::SearchResult;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchQueryDto {
    #[validate(length(min = 1, max = 512, message = "Query must be 1 to 512 characters"))]
    pub q: String,
    #[validate(range(min = 1, message = "Limit must be positive"))]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub search_terms: Vec<String>,
    pub excluded_terms: Vec<String>,
    pub highlight_terms: Vec<String>,
    pub total: usize,
    pub cached: bool,
    pub results: Vec<SearchResult>,
}
