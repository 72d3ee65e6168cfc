use anyhow::{Context, Result};
use clap::Parser;
use shakesearch::server::{self, ServerConfig};
use shakesearch::{SearchOptions, Searcher};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `search --json` output stays clean.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Serve {
            corpus,
            port,
            host,
            static_dir,
            fuzzy_timeout_ms,
        } => {
            let host: IpAddr = host
                .parse()
                .with_context(|| format!("invalid bind address {:?}", host))?;
            let options = SearchOptions {
                fuzzy_timeout: (fuzzy_timeout_ms > 0)
                    .then(|| Duration::from_millis(fuzzy_timeout_ms)),
            };
            let searcher = load(&corpus.corpus)?.with_options(options);
            let config = ServerConfig {
                addr: SocketAddr::new(host, port),
                static_dir: Some(static_dir),
            };
            run_server(config, Arc::new(searcher))
        }
        Commands::Search {
            corpus,
            query,
            limit,
            json,
        } => {
            let searcher = load(&corpus.corpus)?;
            let result = searcher.search(&query);
            if json {
                let payload = serde_json::to_string_pretty(&result.to_response())
                    .context("failed to encode search result")?;
                println!("{}", payload);
            } else {
                cli::display::print_results(&query, &result, limit);
            }
            Ok(())
        }
    }
}

fn load(path: &Path) -> Result<Searcher> {
    Searcher::load(path).context("cannot start without a corpus")
}

fn run_server(config: ServerConfig, searcher: Arc<Searcher>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(server::serve(config.clone(), searcher))
        .with_context(|| format!("server on {} failed", config.addr))
}
