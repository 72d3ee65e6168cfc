// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for indexing and searching arbitrary corpora.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::Searcher;

#[derive(Debug, Arbitrary)]
struct Input {
    corpus: String,
    query: String,
}

impl Input {
    fn corpus_has_markup(&self) -> bool {
        self.corpus.contains('<')
    }
}

fuzz_target!(|input: Input| {
    // Keep corpora small enough for the fuzzy scan to stay fast
    if input.corpus.len() > 4096 || input.query.len() > 256 {
        return;
    }
    let searcher = Searcher::new(input.corpus.clone());

    // INVARIANT 1: offsets stay inside the corpus and increase per word
    for word in searcher.index().vocabulary() {
        let positions = searcher.index().positions(word);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(positions.iter().all(|&p| p <= searcher.corpus().len()));
    }

    // INVARIANT 2: searching never panics, and snippets are corpus excerpts
    let result = searcher.search(&input.query);
    if !input.corpus_has_markup() {
        for snippet in &result.snippets {
            let plain = snippet.replace("<b>", "").replace("</b>", "");
            assert!(searcher.corpus().contains(&plain));
        }
    }
});
