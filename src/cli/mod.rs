// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shakesearch command-line interface.
//!
//! Two subcommands: `serve` loads the corpus and answers HTTP queries, and
//! `search` runs one query against the corpus and prints the snippets.
//! Every path and port can also come from the environment so the server
//! drops into a container without flags.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shakesearch",
    about = "Full-text search over a single corpus, with typo correction",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct CorpusArgs {
    /// Text file to index
    #[arg(long, env = "SHAKESEARCH_CORPUS", default_value = "completeworks.txt")]
    pub corpus: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index the corpus and serve /search over HTTP
    Serve {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3001")]
        port: u16,

        /// Address to bind
        #[arg(long, env = "SHAKESEARCH_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Directory of static assets served for every other path
        #[arg(long, env = "SHAKESEARCH_STATIC_DIR", default_value = "static")]
        static_dir: PathBuf,

        /// Typo-correction deadline per query in milliseconds (0 disables)
        #[arg(long, env = "SHAKESEARCH_FUZZY_TIMEOUT_MS", default_value = "2000")]
        fuzzy_timeout_ms: u64,
    },

    /// Run a single query and print the snippets
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Search query
        query: String,

        /// Maximum number of snippets to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the JSON payload the server would send
        #[arg(long)]
        json: bool,
    },
}
