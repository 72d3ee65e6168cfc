// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction and highlighting.
//!
//! A snippet is the cluster plus [`SNIPPET_SURROUND`] bytes of context on
//! each side, clamped to the corpus and trimmed so it neither starts nor ends
//! inside a word. Query terms are then wrapped in `<b>…</b>`.
//!
//! Terms come from user input, so they are escaped and matched literally.
//! All terms go into one alternation (longest first) and are replaced in a
//! single pass, so a short term never matches inside markup that a longer
//! term already produced.

use crate::search::constants::SNIPPET_SURROUND;
use crate::types::Cluster;
use regex::{Regex, RegexBuilder};

/// Opening highlight tag.
pub const HIGHLIGHT_OPEN: &str = "<b>";
/// Closing highlight tag.
pub const HIGHLIGHT_CLOSE: &str = "</b>";

/// Case-insensitive, literal highlighter for a fixed set of terms.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build a highlighter for `terms`. Empty terms are ignored.
    pub fn new(terms: &[String]) -> Self {
        let mut escaped: Vec<&String> = terms.iter().filter(|t| !t.is_empty()).collect();
        if escaped.is_empty() {
            return Self { pattern: None };
        }
        escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = escaped
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = match RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(error) => {
                tracing::warn!(%error, "highlight pattern rejected, snippets stay plain");
                None
            }
        };
        Self { pattern }
    }

    /// Wrap every occurrence of any term in `text`.
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Some(regex) => regex
                .replace_all(text, |caps: &regex::Captures| {
                    format!("{}{}{}", HIGHLIGHT_OPEN, &caps[0], HIGHLIGHT_CLOSE)
                })
                .into_owned(),
            None => text.to_string(),
        }
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// Does a cut at byte `at` split a word?
fn splits_word(text: &str, at: usize) -> bool {
    let before = text[..at].chars().next_back();
    let after = text[at..].chars().next();
    matches!((before, after), (Some(b), Some(a)) if !b.is_whitespace() && !a.is_whitespace())
}

/// Byte index just past the last whitespace before `at`, or 0.
fn token_start(text: &str, at: usize) -> usize {
    text[..at]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// The un-highlighted excerpt around `first..=last` (byte offsets).
///
/// Never panics: the window is clamped to the corpus and snapped to
/// character boundaries before slicing.
pub fn snippet_window(corpus: &str, first: usize, last: usize) -> &str {
    let len = corpus.len();
    let mut start = floor_char_boundary(corpus, first.saturating_sub(SNIPPET_SURROUND).min(len));
    let mut end = ceil_char_boundary(corpus, last.saturating_add(SNIPPET_SURROUND).min(len));
    if end < start {
        end = start;
    }

    // Punctuation can push a recorded offset past its word's real start, so
    // the span begins at the start of the token holding `first`
    let span_start = token_start(corpus, floor_char_boundary(corpus, first.min(len))).min(end);
    start = start.min(span_start);

    // Partial words are only cut outside the matched span
    let span_end = ceil_char_boundary(corpus, last.min(len)).clamp(span_start, end);

    if splits_word(corpus, start) {
        if let Some(cut) = corpus[start..span_start].find(char::is_whitespace) {
            start += cut;
        }
    }
    if splits_word(corpus, end) {
        if let Some(cut) = corpus[span_end..end].rfind(char::is_whitespace) {
            end = span_end + cut;
        }
    }

    corpus[start..end].trim()
}

/// Highlighted snippet for one cluster.
pub fn extract_snippet(corpus: &str, cluster: &Cluster<'_>, highlighter: &Highlighter) -> String {
    let window = snippet_window(corpus, cluster.first_offset(), cluster.last_offset());
    highlighter.apply(window)
}
