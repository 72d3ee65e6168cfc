// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word index: normalized word → offsets where it starts in the corpus.
//!
//! Built in a single pass over the corpus, once, before any query is served.
//! After that it is frozen; every search borrows it immutably, which is what
//! lets concurrent requests share it without a lock.
//!
//! # Tokenization
//!
//! The scanner accumulates characters into a buffer and cuts a token when it
//! sees a space or newline *and* the buffer already holds more than one
//! character. A lone character followed by whitespace is therefore not cut:
//! the whitespace is buffered too and the token continues (`"I am"` indexes
//! as the single word `"i am"`). Normalization trims the whitespace that
//! accumulates this way.
//!
//! # Offsets
//!
//! Offsets are UTF-8 byte offsets. A token's offset is the boundary position
//! minus the normalized word's length, so punctuation stripped from a token
//! (`"[Enter"`, `"Hello,"`) leaves the offset a little ahead of the word's
//! true start. Snippet extraction trims to word boundaries and does
//! not depend on exact starts.
//!
//! # INVARIANTS
//!
//! 1. **OFFSETS_SORTED**: each word's offsets are strictly increasing
//! 2. **NON_EMPTY**: no empty word is recorded, and every word has ≥ 1 offset
//! 3. **VOCAB_SORTED**: `vocabulary()` is ascending and duplicate-free

use crate::util::normalize::normalize;
use std::collections::HashMap;

/// Immutable word → positions map plus its sorted vocabulary.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: HashMap<String, Vec<usize>>,
    vocabulary: Vec<String>,
}

impl WordIndex {
    /// Index `corpus`. See the module docs for the tokenization rules.
    pub fn build(corpus: &str) -> Self {
        let mut words: HashMap<String, Vec<usize>> = HashMap::new();
        let mut buffer = String::new();
        let mut buffered_chars = 0usize;

        for (pos, ch) in corpus.char_indices() {
            if (ch == ' ' || ch == '\n') && buffered_chars > 1 {
                record_token(&mut words, &buffer, pos);
                buffer.clear();
                buffered_chars = 0;
                continue;
            }
            buffer.push(ch);
            buffered_chars += 1;
        }

        // Last token has no trailing whitespace to cut it
        if buffered_chars > 0 {
            record_token(&mut words, &buffer, corpus.len());
        }

        let mut vocabulary: Vec<String> = words.keys().cloned().collect();
        vocabulary.sort_unstable();

        Self { words, vocabulary }
    }

    /// Offsets of `word` in ascending order; empty if the word is not indexed.
    ///
    /// `word` must already be normalized.
    pub fn positions(&self, word: &str) -> &[usize] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Every distinct indexed word, sorted ascending.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Total number of recorded occurrences across all words.
    pub fn occurrences(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }
}

fn record_token(words: &mut HashMap<String, Vec<usize>>, raw: &str, boundary: usize) {
    let word = normalize(raw);
    if word.is_empty() {
        return;
    }
    let offset = boundary.saturating_sub(word.len());
    let positions = words.entry(word).or_default();
    if positions.last().map_or(true, |&last| last < offset) {
        positions.push(offset);
    }
}
