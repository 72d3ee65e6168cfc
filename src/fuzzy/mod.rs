// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via string similarity.
//!
//! Two layers: a Jaro-Winkler scorer for one-off comparisons, and a corrector
//! that scans the whole vocabulary for the best replacement of a term the
//! index has never seen.

mod corrector;
mod jaro_winkler;

pub use corrector::*;
pub use jaro_winkler::*;
