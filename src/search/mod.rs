// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search stages, leaf-first.
//!
//! Query parsing, position collection, proximity clustering and snippet
//! extraction. Spelling correction lives in [`crate::fuzzy`]; the
//! [`Searcher`](crate::Searcher) strings all of it together.

pub mod budget;
pub mod cluster;
pub mod constants;
pub mod positions;
pub mod snippet;
pub mod utils;
