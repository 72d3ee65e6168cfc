// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deadline and cancellation for the expensive part of a search.
//!
//! Correcting an unknown term means scoring it against the whole vocabulary.
//! A query made of many nonsense words multiplies that cost, so the scan
//! checks a [`SearchBudget`] between chunks and gives up once it runs out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// The budget ran out before the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search budget exhausted")]
pub struct Cancelled;

/// Optional deadline plus an optional externally owned cancel flag.
///
/// The default budget never runs out.
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Budget that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            cancel: None,
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: None,
        }
    }

    /// Also stop once `flag` is set to `true`.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_exhausted(&self) -> bool {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// `Err(Cancelled)` once the budget is exhausted.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_exhausted() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
