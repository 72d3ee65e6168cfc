// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning constants for query handling, clustering and snippets.

/// Raw queries shorter than this (in bytes) return an empty result.
pub const MIN_QUERY_LEN: usize = 2;

/// Query terms must be longer than this many characters.
pub const MIN_TERM_LEN: usize = 1;

/// Max gap between the end of one matched term and the start of the next
/// for both to land in the same cluster.
pub const MAX_DISTANCE: usize = 50;

/// Context included on each side of a cluster when cutting a snippet.
pub const SNIPPET_SURROUND: usize = 50;

/// A correction must score strictly above this.
pub const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Jaro score above which the common-prefix boost applies.
pub const BOOST_THRESHOLD: f64 = 0.5;

/// Longest common prefix that earns a boost.
pub const PREFIX_SIZE: usize = 3;

/// Vocabulary words scored between two budget checks.
pub const SCAN_CHUNK: usize = 4096;
