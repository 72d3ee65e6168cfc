// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request-local values that flow between the search stages, and the wire
//! payload they end up in.
//!
//! | Type            | Produced by        | Consumed by          |
//! |-----------------|--------------------|----------------------|
//! | `Correction`    | fuzzy corrector    | result assembly      |
//! | `PositionEntry` | position collector | cluster engine       |
//! | `Cluster`       | cluster engine     | snippet extractor    |
//! | `SearchResult`  | `Searcher::search` | CLI, HTTP handler    |
//! | `SearchResponse`| `SearchResult`     | JSON clients         |
//!
//! Nothing here outlives a single search call except the response.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// An unmatched query term and the vocabulary word chosen in its place.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub original: String,
    pub replacement: String,
    /// Jaro-Winkler similarity, always above the acceptance threshold.
    pub score: f64,
}

/// One occurrence of a resolved term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionEntry<'a> {
    pub offset: usize,
    pub term: &'a str,
}

impl PositionEntry<'_> {
    /// First byte after the term, assuming the offset is exact.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.term.len()
    }
}

/// A maximal run of nearby occurrences, sorted by offset.
///
/// **Invariant**: `entries` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster<'a> {
    entries: Vec<PositionEntry<'a>>,
}

impl<'a> Cluster<'a> {
    pub(crate) fn start(entry: PositionEntry<'a>) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    pub(crate) fn push(&mut self, entry: PositionEntry<'a>) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PositionEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_offset(&self) -> usize {
        self.entries.first().map_or(0, |e| e.offset)
    }

    pub fn last_offset(&self) -> usize {
        self.entries.last().map_or(0, |e| e.offset)
    }

    pub(crate) fn last(&self) -> Option<&PositionEntry<'a>> {
        self.entries.last()
    }

    /// Distinct terms occurring in this cluster.
    pub fn distinct_terms(&self) -> HashSet<&'a str> {
        self.entries.iter().map(|e| e.term).collect()
    }
}

/// Outcome of one search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Highlighted snippets in corpus order.
    pub snippets: Vec<String>,
    /// Wall-clock time spent in `Searcher::search`.
    pub elapsed: Duration,
    /// `(original, corrected)` pairs in query order.
    pub replaced: Vec<(String, String)>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Convert to the JSON payload served over HTTP.
    pub fn to_response(&self) -> SearchResponse {
        SearchResponse {
            results: self.snippets.clone(),
            time: vec![format_elapsed(self.elapsed)],
            replaced: self
                .replaced
                .iter()
                .flat_map(|(original, corrected)| [original.clone(), corrected.clone()])
                .collect(),
        }
    }
}

/// JSON body of a successful `/search` response.
///
/// `results` is omitted when there are none; `replaced` alternates original
/// and corrected terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<String>,
    pub time: Vec<String>,
    #[serde(default)]
    pub replaced: Vec<String>,
}

/// Human-readable duration, e.g. `152.4µs`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:?}", elapsed)
}
