// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The searcher: one corpus, one index, many concurrent queries.
//!
//! ```text
//! query ─▶ parse ─▶ correct typos ─▶ collect positions ─▶ cluster ─▶ snippets
//!            │            │                  │                │
//!            ▼            ▼                  ▼                ▼
//!         < 2 bytes   unresolved         no positions     no valid
//!         → empty     → empty            → empty          → empty
//! ```
//!
//! Every exit path returns a timed [`SearchResult`]. The index is built in
//! the constructor and never touched mutably again, so a `Searcher` can sit
//! behind an `Arc` and serve any number of threads.

use crate::error::LoadError;
use crate::fuzzy::correct_terms;
use crate::index::WordIndex;
use crate::search::budget::{Cancelled, SearchBudget};
use crate::search::cluster::valid_clusters;
use crate::search::constants::MIN_QUERY_LEN;
use crate::search::positions::{collect_positions, resolve_terms};
use crate::search::snippet::{extract_snippet, Highlighter};
use crate::search::utils::parse_query;
use crate::types::SearchResult;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Per-searcher settings.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Deadline for the typo-correction scan of each query. `None` = no limit.
    pub fuzzy_timeout: Option<Duration>,
}

impl SearchOptions {
    fn budget(&self) -> SearchBudget {
        match self.fuzzy_timeout {
            Some(timeout) => SearchBudget::with_timeout(timeout),
            None => SearchBudget::unlimited(),
        }
    }
}

/// Owns the corpus and its word index.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: String,
    index: WordIndex,
    options: SearchOptions,
}

/// Snippets and replacements produced before timing is attached.
#[derive(Default)]
struct Found {
    snippets: Vec<String>,
    replaced: Vec<(String, String)>,
}

impl Searcher {
    /// Index `corpus` in memory.
    pub fn new(corpus: impl Into<String>) -> Self {
        let corpus = corpus.into();
        let started = Instant::now();
        let index = WordIndex::build(&corpus);
        info!(
            bytes = corpus.len(),
            words = index.len(),
            occurrences = index.occurrences(),
            elapsed = ?started.elapsed(),
            "indexed corpus"
        );
        Self {
            corpus,
            index,
            options: SearchOptions::default(),
        }
    }

    /// Read and index a UTF-8 text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = String::from_utf8(bytes).map_err(|_| LoadError::Encoding {
            path: path.to_path_buf(),
        })?;
        Ok(Self::new(corpus))
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search with the configured fuzzy deadline.
    pub fn search(&self, query: &str) -> SearchResult {
        self.search_with_budget(query, &self.options.budget())
    }

    /// Search, giving up on typo correction once `budget` runs out.
    ///
    /// A cancelled search returns an empty result.
    pub fn search_with_budget(&self, query: &str, budget: &SearchBudget) -> SearchResult {
        let started = Instant::now();
        let found = match self.find(query, budget) {
            Ok(found) => found,
            Err(Cancelled) => {
                warn!(query, "fuzzy scan ran out of budget");
                Found::default()
            }
        };
        let elapsed = started.elapsed();
        debug!(
            query,
            snippets = found.snippets.len(),
            replaced = found.replaced.len(),
            ?elapsed,
            "search finished"
        );
        SearchResult {
            snippets: found.snippets,
            elapsed,
            replaced: found.replaced,
        }
    }

    fn find(&self, query: &str, budget: &SearchBudget) -> Result<Found, Cancelled> {
        if query.len() < MIN_QUERY_LEN {
            return Ok(Found::default());
        }

        let (direct, missing): (Vec<String>, Vec<String>) = parse_query(query)
            .into_iter()
            .partition(|term| self.index.contains(term));

        let corrections = correct_terms(&missing, &self.index, budget)?;
        if missing.len() > corrections.len() {
            debug!(
                missing = missing.len(),
                corrected = corrections.len(),
                "query has terms with no good replacement"
            );
            return Ok(Found::default());
        }

        let replaced: Vec<(String, String)> = corrections
            .iter()
            .map(|c| (c.original.clone(), c.replacement.clone()))
            .collect();

        let terms = resolve_terms(&direct, &corrections);
        let entries = collect_positions(&self.index, &terms);
        if entries.is_empty() {
            return Ok(Found {
                snippets: Vec::new(),
                replaced,
            });
        }

        let highlighter = Highlighter::new(&terms);
        let snippets = valid_clusters(&entries, terms.len())
            .iter()
            .map(|cluster| extract_snippet(&self.corpus, cluster, &highlighter))
            .collect();

        Ok(Found { snippets, replaced })
    }
}
