// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the searcher to verify it never panics
//! and never returns malformed snippets.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shakesearch::testing::sample_searcher;
use shakesearch::Searcher;
use std::sync::OnceLock;

fuzz_target!(|query: &[u8]| {
    static SEARCHER: OnceLock<Searcher> = OnceLock::new();
    let searcher = SEARCHER.get_or_init(sample_searcher);

    let query = String::from_utf8_lossy(query);
    let result = searcher.search(&query);

    // INVARIANT 1: markup is balanced
    for snippet in &result.snippets {
        assert_eq!(snippet.matches("<b>").count(), snippet.matches("</b>").count());
    }

    // INVARIANT 2: every snippet is a verbatim excerpt once markup is removed
    for snippet in &result.snippets {
        let plain = snippet.replace("<b>", "").replace("</b>", "");
        assert!(searcher.corpus().contains(&plain), "not in corpus: {:?}", plain);
    }

    // INVARIANT 3: corrections only ever point at indexed words
    for (original, replacement) in &result.replaced {
        assert!(!searcher.index().contains(original));
        assert!(searcher.index().contains(replacement));
    }

    // INVARIANT 4: short queries never match
    if query.len() < 2 {
        assert!(result.snippets.is_empty());
    }
});
