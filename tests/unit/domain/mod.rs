// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod integrity_test;
mod search_test;
mod stemmer_test;
