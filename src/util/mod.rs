// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers that both the indexer and the query side depend on.

pub mod normalize;
