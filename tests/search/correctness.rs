//! Exact-match behavior on the sample corpus.

use super::common::*;

#[test]
fn verbatim_term_is_found_and_highlighted() {
    let result = SAMPLE.search("moon");
    assert_eq!(result.snippets.len(), 1);
    assert!(result.snippets[0].contains("<b>moon</b>"));
    assert!(result.replaced.is_empty());
    assert_well_formed(&result);
}

#[test]
fn highlighting_ignores_case() {
    let result = SAMPLE.search("JULIET");
    assert!(!result.snippets.is_empty());
    let highlighted: Vec<String> = result
        .snippets
        .iter()
        .flat_map(|s| highlighted_terms(s))
        .collect();
    assert!(highlighted.iter().any(|t| t == "Juliet"));
    assert!(highlighted.iter().any(|t| t == "JULIET"));
}

#[test]
fn punctuation_in_query_is_ignored() {
    let plain = SAMPLE.search("window");
    let decorated = SAMPLE.search("window?!");
    assert_eq!(plain.snippets, decorated.snippets);
    assert_eq!(plain.snippets.len(), 1);
}

#[test]
fn repeated_terms_count_once() {
    let once = SAMPLE.search("sun");
    let twice = SAMPLE.search("sun SUN sun,");
    assert_eq!(once.snippets, twice.snippets);
}

#[test]
fn every_snippet_contains_every_term() {
    let result = SAMPLE.search("fair sun");
    assert!(!result.snippets.is_empty());
    for snippet in &result.snippets {
        let lower = snippet.to_lowercase();
        assert!(lower.contains("<b>fair</b>"), "{}", snippet);
        assert!(lower.contains("<b>sun</b>"), "{}", snippet);
    }
}

#[test]
fn scattered_occurrences_give_one_snippet_each() {
    // "thy" appears twice within one line; "thou" on two distant lines
    let thy = SAMPLE.search("thy");
    assert_eq!(thy.snippets.len(), 1);

    let thou = SAMPLE.search("thou");
    assert_eq!(thou.snippets.len(), 3);
}

#[test]
fn absent_long_word_without_neighbors_returns_nothing() {
    let result = SAMPLE.search("xylophonic");
    assert!(result.snippets.is_empty());
    assert!(result.replaced.is_empty());
}
