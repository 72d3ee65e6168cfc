// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.

use crate::search::constants::MIN_TERM_LEN;
use crate::util::normalize::normalize;
use std::collections::HashSet;

/// Parse a raw query into distinct normalized terms, in first-seen order.
///
/// Splits on spaces only, normalizes every piece and drops pieces of one
/// character or less.
///
/// # Example
///
/// ```
/// use shakesearch::parse_query;
///
/// let terms = parse_query("To be, or not to BE");
/// assert_eq!(terms, vec!["to", "be", "or", "not"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    query
        .split(' ')
        .map(normalize)
        .filter(|term| term.chars().count() > MIN_TERM_LEN)
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
