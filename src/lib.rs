//! In-memory full-text search over a single corpus.
//!
//! The corpus is indexed once into a word → positions map. Queries are
//! normalized, misspelled terms are corrected against the vocabulary, and the
//! occurrences of all terms are clustered by proximity. Every cluster that
//! contains all terms becomes a highlighted snippet.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ util/        │────▶│  index/      │────▶│   searcher.rs    │
//! │ (normalize)  │     │ (WordIndex)  │     │ (Searcher)       │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!                                                    │
//!        ┌──────────────────┬────────────────────────┼──────────────┐
//!        ▼                  ▼                        ▼              ▼
//! ┌──────────────┐  ┌──────────────┐  ┌───────────────────┐  ┌────────────┐
//! │search/utils  │  │ fuzzy/       │  │ search/positions  │  │ search/    │
//! │(parse_query) │  │ (corrector)  │  │ search/cluster    │  │ snippet    │
//! └──────────────┘  └──────────────┘  └───────────────────┘  └────────────┘
//! ```
//!
//! `server` exposes the searcher over HTTP; `cli` (binary only) wraps both.
//!
//! # Usage
//!
//! ```
//! use shakesearch::Searcher;
//!
//! let searcher = Searcher::new("O Romeo, Romeo, wherefore art thou Romeo?\n");
//! let result = searcher.search("romeo");
//! assert_eq!(result.snippets.len(), 1);
//! assert!(result.snippets[0].contains("<b>Romeo</b>"));
//! ```

// Module declarations
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod search;
mod searcher;
pub mod server;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use error::LoadError;
pub use fuzzy::{best_match, correct_terms, jaro_winkler, Candidate};
pub use index::WordIndex;
pub use search::budget::{Cancelled, SearchBudget};
pub use search::cluster::{build_clusters, is_valid_cluster, valid_clusters};
pub use search::positions::{collect_positions, resolve_terms};
pub use search::snippet::{extract_snippet, snippet_window, Highlighter};
pub use search::utils::parse_query;
pub use searcher::{SearchOptions, Searcher};
pub use types::{
    format_elapsed, Cluster, Correction, PositionEntry, SearchResponse, SearchResult,
};
pub use util::normalize::normalize;
