//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use shakesearch::{SearchResult, Searcher};
use std::sync::LazyLock;

// Re-export canonical test utilities from shakesearch::testing
pub use shakesearch::testing::{corpus_of, filler, highlighted_terms, sample_searcher, SAMPLE_CORPUS};

/// Shared searcher over the sample corpus (indexing once per test binary).
pub static SAMPLE: LazyLock<Searcher> = LazyLock::new(sample_searcher);

/// Build a searcher from literal text.
pub fn searcher(text: &str) -> Searcher {
    Searcher::new(text)
}

/// Assert the structural guarantees every result must satisfy.
pub fn assert_well_formed(result: &SearchResult) {
    for snippet in &result.snippets {
        assert!(!snippet.is_empty(), "empty snippet in {:?}", result.snippets);
        assert_eq!(
            snippet.matches("<b>").count(),
            snippet.matches("</b>").count(),
            "unbalanced highlight markup: {}",
            snippet
        );
        assert_eq!(snippet.trim(), snippet, "snippet has surrounding whitespace");
    }
}

/// `(original, corrected)` pairs as `&str` for terse assertions.
pub fn replaced(result: &SearchResult) -> Vec<(&str, &str)> {
    result
        .replaced
        .iter()
        .map(|(o, c)| (o.as_str(), c.as_str()))
        .collect()
}
