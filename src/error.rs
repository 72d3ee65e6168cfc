// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Startup errors.
//!
//! Loading the corpus is the only fallible step in the library. Everything
//! after that is a pure read over immutable data, and "nothing found" is an
//! empty result, not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a corpus could not be turned into a [`Searcher`](crate::Searcher).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read corpus {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corpus {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
}
