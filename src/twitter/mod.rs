// Twitter API module.
// Provides the signed client and types for reading user timelines.

pub mod client;
pub mod endpoints;
pub mod oauth;
pub mod types;

pub use client::TwitterClient;
pub use types::*;
