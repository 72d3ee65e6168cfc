// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaro-Winkler similarity with a configurable boost.
//!
//! `strsim` supplies the Jaro score. The Winkler step is done here because
//! the boost rules differ from `strsim::jaro_winkler`: the prefix bonus kicks
//! in above a Jaro score of 0.5 (not 0.7) and counts at most 3 leading
//! characters (not 4).

use crate::search::constants::{BOOST_THRESHOLD, PREFIX_SIZE};

/// Weight of each matching prefix character.
const PREFIX_SCALE: f64 = 0.1;

/// Similarity in `[0, 1]`; `1.0` means identical.
///
/// ```
/// use shakesearch::jaro_winkler;
///
/// assert_eq!(jaro_winkler("romeo", "romeo"), 1.0);
/// assert!(jaro_winkler("romoe", "romeo") > 0.85);
/// assert!(jaro_winkler("zzz", "romeo") < 0.5);
/// ```
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let jaro = strsim::jaro(a, b);
    if jaro <= BOOST_THRESHOLD {
        return jaro;
    }

    let prefix = a
        .chars()
        .zip(b.chars())
        .take(PREFIX_SIZE)
        .take_while(|(ca, cb)| ca == cb)
        .count();

    jaro + PREFIX_SCALE * prefix as f64 * (1.0 - jaro)
}
