// Cache module for local filesystem caching.
// Stores each user's fetched tweets so later runs only walk further back.

pub mod store;

pub use store::{Cache, CacheSession, DEFAULT_CACHE_FILE, Tweet};
