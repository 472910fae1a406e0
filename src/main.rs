// restroom: when and where does a Twitter user tweet?
// Loads the cache, optionally fetches older tweets, saves, then prints the report.

mod cache;
mod config;
mod error;
mod fetch;
mod report;
mod stats;
mod twitter;

use std::io;
use std::process::ExitCode;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cache::CacheSession;
use crate::config::Config;
use crate::error::Result;
use crate::stats::Stats;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("restroom: {}.", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "restroom=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(config.verbose);

    let mut session = CacheSession::open(&config.cache_path);
    debug!(
        "loaded {} cached tweets for {} from {}",
        session.history(&config.user).len(),
        config.user,
        session.path().display()
    );
    let fetched = match config.credentials.clone() {
        Some(credentials) => fetch::fetch_more(&mut session, &config.user, credentials)
            .await
            .map(|_| ()),
        None => Ok(()),
    };
    let saved = session.persist();
    if let (Err(_), Err(e)) = (&fetched, &saved) {
        warn!("failed to save cache: {}", e);
    }
    fetched?;
    saved?;

    let stats = Stats::from_history(session.history(&config.user));
    report::write_report(&mut io::stdout().lock(), &stats)?;
    Ok(())
}
