//! Multi-term queries only match passages containing every term.

use super::common::*;

#[test]
fn adjacent_terms_form_one_passage() {
    let result = SAMPLE.search("romeo juliet");
    assert_eq!(result.snippets.len(), 1);
    let lower = result.snippets[0].to_lowercase();
    assert!(lower.contains("<b>juliet</b>"));
    assert!(lower.contains("<b>romeo</b>"));
}

#[test]
fn terms_just_out_of_range_do_not_match() {
    // "Juliet" ends 52 bytes before "moon" starts
    let result = SAMPLE.search("moon juliet");
    assert!(result.snippets.is_empty());
}

#[test]
fn passage_with_one_term_is_never_returned() {
    let text = format!(
        "alpha beta {} alpha only here {} beta only here\n",
        filler("filler", 30),
        filler("filler", 30)
    );
    let searcher = searcher(&text);
    let result = searcher.search("alpha beta");
    assert_eq!(result.snippets.len(), 1);
    assert!(result.snippets[0].starts_with("<b>alpha</b> <b>beta</b>"));
    assert!(!result.snippets[0].contains("only"));
}

#[test]
fn distance_is_measured_between_word_edges() {
    // "alpha" ends at 16; the filler is 45 bytes
    let gap = filler("xx", 15);
    let near = searcher(&format!("start here alpha {}yyy beta end\n", gap));
    assert_eq!(near.search("alpha beta").snippets.len(), 1, "gap of exactly 50");

    let far = searcher(&format!("start here alpha {}yyyy beta end\n", gap));
    assert!(far.search("alpha beta").snippets.is_empty(), "gap of 51");
}

#[test]
fn order_of_terms_does_not_matter() {
    let forward = SAMPLE.search("fair sun");
    let backward = SAMPLE.search("sun fair");
    assert_eq!(forward.snippets, backward.snippets);
}

#[test]
fn three_terms_need_all_three() {
    let result = SAMPLE.search("father refuse name");
    assert_eq!(result.snippets.len(), 1);

    let missing_one = SAMPLE.search("father refuse moon");
    assert!(missing_one.snippets.is_empty());
}
