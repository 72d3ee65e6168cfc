//! Typo correction through the full search path.

use super::common::*;
use shakesearch::{SearchBudget, Searcher};
use std::time::Instant;

#[test]
fn misspelled_term_is_replaced() {
    let result = SAMPLE.search("julet");
    assert_eq!(replaced(&result), vec![("julet", "juliet")]);
    assert_eq!(result.snippets.len(), 2);
    for snippet in &result.snippets {
        let terms = highlighted_terms(snippet);
        assert!(terms.iter().any(|t| t.eq_ignore_ascii_case("juliet")), "{}", snippet);
    }
}

#[test]
fn transposed_letters_are_corrected() {
    let result = SAMPLE.search("wherfore");
    assert_eq!(replaced(&result), vec![("wherfore", "wherefore")]);
    assert!(result.snippets[0].contains("<b>wherefore</b>"));
}

#[test]
fn unmatchable_term_yields_nothing() {
    let result = SAMPLE.search("qwertyuiop");
    assert!(result.snippets.is_empty());
    assert!(result.replaced.is_empty());
}

#[test]
fn one_unmatchable_term_sinks_the_whole_query() {
    // "juliet" matches directly, but the second term has no interpretation
    let result = SAMPLE.search("juliet qwertyuiop");
    assert!(result.snippets.is_empty());
    assert!(result.replaced.is_empty());
}

#[test]
fn correction_to_an_existing_term_counts_once() {
    let direct = SAMPLE.search("romeo");
    let mixed = SAMPLE.search("romoe romeo");
    assert_eq!(replaced(&mixed), vec![("romoe", "romeo")]);
    assert_eq!(mixed.snippets, direct.snippets);
}

#[test]
fn several_typos_are_reported_in_query_order() {
    let result = SAMPLE.search("julet sunn");
    assert_eq!(replaced(&result), vec![("julet", "juliet"), ("sunn", "sun")]);
    assert_eq!(result.snippets.len(), 1);
    assert!(result.snippets[0].contains("<b>Juliet</b>"));
    assert!(result.snippets[0].contains("<b>sun</b>"));
}

#[test]
fn ties_resolve_to_the_smallest_word() {
    // "abcz" scores the same against both candidates
    let searcher = Searcher::new(corpus_of(&["abcy", "abcx"]));
    let result = searcher.search("abcz");
    assert_eq!(replaced(&result), vec![("abcz", "abcx")]);
}

#[test]
fn expired_budget_returns_empty_result() {
    let budget = SearchBudget::with_deadline(Instant::now());
    let result = SAMPLE.search_with_budget("julet", &budget);
    assert!(result.snippets.is_empty());
    assert!(result.replaced.is_empty());
}
