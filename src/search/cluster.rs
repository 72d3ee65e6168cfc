// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Proximity clustering of term occurrences.
//!
//! Sorted occurrences are cut into runs wherever the gap between the end of
//! one term and the start of the next exceeds [`MAX_DISTANCE`]. A run that
//! contains every query term is a passage worth showing.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **EXHAUSTIVE**: every input entry lands in exactly one cluster, the
//!    last one included
//! 2. **ORDERED**: clusters, and entries within them, keep input order
//! 3. **COMPLETE_TERMS**: a valid cluster contains all resolved terms

use crate::search::constants::MAX_DISTANCE;
use crate::types::{Cluster, PositionEntry};

/// Gap between the end of `prev` and the start of `next`, zero if they overlap.
///
/// Measured from the end of `prev`, not its start: a long word does not eat
/// into the allowed distance.
#[inline]
fn gap(prev: &PositionEntry<'_>, next: &PositionEntry<'_>) -> usize {
    next.offset.saturating_sub(prev.end())
}

/// Cut offset-sorted entries into maximal proximity runs.
pub fn build_clusters<'a>(entries: &[PositionEntry<'a>]) -> Vec<Cluster<'a>> {
    let mut clusters = Vec::new();
    let mut current: Option<Cluster<'a>> = None;

    for &entry in entries {
        current = Some(match current.take() {
            Some(mut cluster) => {
                let joins = cluster
                    .last()
                    .is_some_and(|prev| gap(prev, &entry) <= MAX_DISTANCE);
                if joins {
                    cluster.push(entry);
                    cluster
                } else {
                    clusters.push(cluster);
                    Cluster::start(entry)
                }
            }
            None => Cluster::start(entry),
        });
    }

    if let Some(cluster) = current {
        clusters.push(cluster);
    }
    clusters
}

/// Does `cluster` contain all `term_count` resolved terms?
///
/// Single-term queries accept any non-empty cluster.
pub fn is_valid_cluster(cluster: &Cluster<'_>, term_count: usize) -> bool {
    if cluster.is_empty() || cluster.len() < term_count {
        return false;
    }
    if term_count == 1 {
        return true;
    }
    cluster.distinct_terms().len() == term_count
}

/// Clusters of `entries` that contain every resolved term, in corpus order.
pub fn valid_clusters<'a>(entries: &[PositionEntry<'a>], term_count: usize) -> Vec<Cluster<'a>> {
    build_clusters(entries)
        .into_iter()
        .filter(|cluster| is_valid_cluster(cluster, term_count))
        .collect()
}
