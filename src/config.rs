// Command line parsing and run configuration.
// Turns flags and environment variables into a validated Config.

use std::path::PathBuf;

use clap::Parser;

use crate::cache::DEFAULT_CACHE_FILE;
use crate::error::{RestroomError, Result};

/// Fetch a user's tweets into a local cache and report when and where they tweet.
#[derive(Debug, Parser)]
#[command(name = "restroom", version)]
pub struct CliArgs {
    /// User to query
    #[arg(short = 'u')]
    pub user: Option<String>,

    /// Verbose output
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Consumer key
    #[arg(short = 'k', env = "TWITTER_CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: Option<String>,

    /// Consumer secret
    #[arg(short = 'c', env = "TWITTER_CONSUMER_SECRET", hide_env_values = true)]
    pub consumer_secret: Option<String>,

    /// Access token
    #[arg(short = 't', env = "TWITTER_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Access token secret
    #[arg(short = 's', env = "TWITTER_ACCESS_SECRET", hide_env_values = true)]
    pub token_secret: Option<String>,

    /// Cache file
    #[arg(long = "cache", env = "RESTROOM_CACHE", default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,
}

/// OAuth 1.0a user credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub user: String,
    pub verbose: bool,
    pub cache_path: PathBuf,
    /// `None` means report from the cache without contacting Twitter.
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Parse the process arguments.
    ///
    /// Usage errors become a one line [`RestroomError::Usage`]; `--help` and
    /// `--version` print and exit.
    pub fn from_env() -> Result<Self> {
        let args = match CliArgs::try_parse() {
            Ok(args) => args,
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => {
                let rendered = e.to_string();
                let line = rendered.lines().next().unwrap_or_default();
                return Err(RestroomError::Usage(
                    line.trim_start_matches("error: ").to_string(),
                ));
            }
        };
        Self::from_args(args)
    }

    pub fn from_args(args: CliArgs) -> Result<Self> {
        let user = args
            .user
            .filter(|u| !u.is_empty())
            .ok_or(RestroomError::MissingUser)?;

        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        let credentials = match (non_empty(args.token), non_empty(args.token_secret)) {
            (None, None) => None,
            (Some(token), Some(token_secret)) => Some(Credentials {
                consumer_key: args.consumer_key.unwrap_or_default(),
                consumer_secret: args.consumer_secret.unwrap_or_default(),
                token,
                token_secret,
            }),
            _ => return Err(RestroomError::IncompleteCredentials),
        };

        Ok(Self {
            user,
            verbose: args.verbose,
            cache_path: args.cache,
            credentials,
        })
    }
}
