//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::searcher::Searcher;

/// A short public-domain passage with repeated, scattered and punctuated words.
pub const SAMPLE_CORPUS: &str = "\
ACT II. SCENE II. Capulet's orchard.

Enter Romeo.

ROMEO. He jests at scars that never felt a wound.
But soft, what light through yonder window breaks?
It is the east, and Juliet is the sun.
Arise, fair sun, and kill the envious moon,
Who is already sick and pale with grief,
That thou her maid art far more fair than she.

JULIET. O Romeo, Romeo, wherefore art thou Romeo?
Deny thy father and refuse thy name.
Or if thou wilt not, be but sworn my love,
And I'll no longer be a Capulet.
";

/// Searcher over [`SAMPLE_CORPUS`].
pub fn sample_searcher() -> Searcher {
    Searcher::new(SAMPLE_CORPUS)
}

/// `words` separated by single spaces, with a trailing newline.
pub fn corpus_of(words: &[&str]) -> String {
    let mut text = words.join(" ");
    text.push('\n');
    text
}

/// `count` copies of a filler word, space separated, with a trailing space.
///
/// Handy for pushing two terms far apart.
pub fn filler(word: &str, count: usize) -> String {
    let mut text = String::with_capacity((word.len() + 1) * count);
    for _ in 0..count {
        text.push_str(word);
        text.push(' ');
    }
    text
}

/// Inner text of every `<b>…</b>` span in a snippet.
pub fn highlighted_terms(snippet: &str) -> Vec<String> {
    snippet
        .split("<b>")
        .skip(1)
        .filter_map(|part| part.split_once("</b>").map(|(inner, _)| inner.to_string()))
        .collect()
}
