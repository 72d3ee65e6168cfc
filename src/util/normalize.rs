// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token normalization shared by indexing and query parsing.
//!
//! Both sides of a lookup must agree on what a "word" is, so there is exactly
//! one function for it. The rules are deliberately blunt: drop a fixed set of
//! punctuation marks wherever they appear, trim, lowercase. No stemming, no
//! Unicode folding beyond `to_lowercase`.

/// Punctuation removed from every token.
///
/// Each mark is a single character, so removing them one at a time also
/// collapses runs like `"--"` or `"?!"`.
pub const PUNCTUATION: [char; 11] = [',', '.', '?', '!', ';', '-', '[', ']', '_', '\'', '`'];

/// Normalize a raw token: strip punctuation, trim whitespace, lowercase.
///
/// The result may be empty (e.g. for `"--"`); callers decide what to do with that.
///
/// ```
/// use shakesearch::normalize;
///
/// assert_eq!(normalize("Hello,"), "hello");
/// assert_eq!(normalize("  [Exit]  "), "exit");
/// assert_eq!(normalize("--"), "");
/// ```
pub fn normalize(token: &str) -> String {
    let stripped: String = token.chars().filter(|c| !PUNCTUATION.contains(c)).collect();
    stripped.trim().to_lowercase()
}
