// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling correction against the index vocabulary.
//!
//! For a term the index does not contain, every vocabulary word is scored
//! with [`jaro_winkler`] and the best one scoring strictly above
//! [`SIMILARITY_THRESHOLD`] becomes the replacement.
//!
//! **Determinism**: the vocabulary is sorted, and a candidate only displaces
//! the current best with a strictly higher score. Ties go to the
//! lexicographically smallest word, in both the sequential and the parallel
//! scan.
//!
//! **Cost**: linear in vocabulary size per unknown term. The scan works in
//! chunks of [`SCAN_CHUNK`] words and checks the [`SearchBudget`] before each.

use super::jaro_winkler::jaro_winkler;
use crate::index::WordIndex;
use crate::search::budget::{Cancelled, SearchBudget};
use crate::search::constants::{SCAN_CHUNK, SIMILARITY_THRESHOLD};
use crate::types::Correction;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A vocabulary word and its score against the term being corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub score: f64,
}

impl<'a> Candidate<'a> {
    /// The better of two candidates: higher score, then smaller word.
    fn better(self, other: Candidate<'a>) -> Candidate<'a> {
        if other.score > self.score || (other.score == self.score && other.word < self.word) {
            other
        } else {
            self
        }
    }
}

/// Best vocabulary match for `term` scoring above the threshold, if any.
pub fn best_match<'a>(
    term: &str,
    vocabulary: &'a [String],
    budget: &SearchBudget,
) -> Result<Option<Candidate<'a>>, Cancelled> {
    let mut best: Option<Candidate<'a>> = None;
    for chunk in vocabulary.chunks(SCAN_CHUNK) {
        budget.check()?;
        if let Some(candidate) = scan_chunk(term, chunk) {
            best = Some(match best {
                Some(current) => current.better(candidate),
                None => candidate,
            });
        }
    }
    Ok(best)
}

#[cfg(feature = "parallel")]
fn scan_chunk<'a>(term: &str, chunk: &'a [String]) -> Option<Candidate<'a>> {
    chunk
        .par_iter()
        .map(|word| Candidate {
            word: word.as_str(),
            score: jaro_winkler(term, word),
        })
        .filter(|candidate| candidate.score > SIMILARITY_THRESHOLD)
        .reduce_with(Candidate::better)
}

#[cfg(not(feature = "parallel"))]
fn scan_chunk<'a>(term: &str, chunk: &'a [String]) -> Option<Candidate<'a>> {
    chunk
        .iter()
        .map(|word| Candidate {
            word: word.as_str(),
            score: jaro_winkler(term, word),
        })
        .filter(|candidate| candidate.score > SIMILARITY_THRESHOLD)
        .reduce(Candidate::better)
}

/// Correct every term in `missing`, in order.
///
/// Terms without an acceptable match are left out of the returned list; the
/// caller compares lengths to decide whether the query still makes sense.
pub fn correct_terms(
    missing: &[String],
    index: &WordIndex,
    budget: &SearchBudget,
) -> Result<Vec<Correction>, Cancelled> {
    let mut corrections = Vec::with_capacity(missing.len());
    for term in missing {
        if let Some(candidate) = best_match(term, index.vocabulary(), budget)? {
            corrections.push(Correction {
                original: term.clone(),
                replacement: candidate.word.to_string(),
                score: candidate.score,
            });
        }
    }
    Ok(corrections)
}
