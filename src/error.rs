// Error types for restroom.
// Covers configuration mistakes, Twitter API failures, cache I/O and bad timestamps.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestroomError {
    #[error("Twitter API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("-u is required")]
    MissingUser,

    #[error(
        "both -t and -s are required. If you don't have one, visit https://apps.twitter.com/app/new to create a new token"
    )]
    IncompleteCredentials,

    #[error("{0}")]
    Usage(String),

    #[error("time: cannot parse {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RestroomError>;
