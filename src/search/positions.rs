// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resolving the final term set and gathering its occurrences.

use crate::index::WordIndex;
use crate::types::{Correction, PositionEntry};
use std::collections::HashSet;

/// Direct matches followed by correction replacements, without duplicates.
///
/// A typo can correct to a word the query already contains ("romeo romoe");
/// that word must only count once or no cluster could ever satisfy it.
pub fn resolve_terms(direct: &[String], corrections: &[Correction]) -> Vec<String> {
    let mut seen = HashSet::new();
    direct
        .iter()
        .chain(corrections.iter().map(|c| &c.replacement))
        .filter(|term| seen.insert(term.as_str()))
        .cloned()
        .collect()
}

/// Every occurrence of every term, sorted by offset.
///
/// Ties on offset (only possible when lowercasing changed a word's length)
/// are broken by term so the order is reproducible.
pub fn collect_positions<'a>(index: &WordIndex, terms: &'a [String]) -> Vec<PositionEntry<'a>> {
    let capacity = terms.iter().map(|t| index.positions(t).len()).sum();
    let mut entries = Vec::with_capacity(capacity);
    for term in terms {
        entries.extend(index.positions(term).iter().map(|&offset| PositionEntry {
            offset,
            term: term.as_str(),
        }));
    }
    entries.sort_unstable_by(|a, b| a.offset.cmp(&b.offset).then_with(|| a.term.cmp(b.term)));
    entries
}
