// Cache store for the per-user tweet history.
// Handles JSON serialization, tolerant loading, atomic writes and save-on-exit.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::Result;

/// Default cache file, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "restroom.json";

/// A cached tweet, reduced to the fields the report needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tweet {
    pub created_at: DateTime<Utc>,
    pub id: i64,
    /// Empty when the tweet has no place attached.
    #[serde(default)]
    pub place: String,
}

/// All cached histories, keyed by screen name.
///
/// Each history is kept in the order tweets were appended by the fetcher,
/// newest first within a run and older runs' tail extended backward in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    #[serde(rename = "Users", default)]
    pub users: BTreeMap<String, Vec<Tweet>>,
}

impl Cache {
    /// Load the cache from `path`.
    ///
    /// A missing or unreadable file starts fresh with an empty cache.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("no cache at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(cache) => cache,
            Err(e) => {
                debug!("ignoring malformed cache {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the cache to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(self)?;

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        debug!("saved cache to {}", path.display());
        Ok(())
    }

    /// The cached history for `user`, empty if the user was never fetched.
    pub fn history(&self, user: &str) -> &[Tweet] {
        self.users.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable history for `user`, created on first use.
    pub fn history_mut(&mut self, user: &str) -> &mut Vec<Tweet> {
        self.users.entry(user.to_string()).or_default()
    }
}

/// A loaded cache bound to the file it came from.
///
/// The cache is written back exactly once: either through [`persist`] or,
/// if the session is dropped before that, from `Drop`.
///
/// [`persist`]: CacheSession::persist
#[derive(Debug)]
pub struct CacheSession {
    cache: Cache,
    path: PathBuf,
    persisted: bool,
}

impl CacheSession {
    /// Load the cache at `path` and take ownership of it for this run.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = Cache::load(&path);
        Self {
            cache,
            path,
            persisted: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save the cache now. Later calls and the drop are no-ops.
    pub fn persist(&mut self) -> Result<()> {
        if self.persisted {
            return Ok(());
        }
        self.persisted = true;
        self.cache.save(&self.path)
    }
}

impl Deref for CacheSession {
    type Target = Cache;

    fn deref(&self) -> &Cache {
        &self.cache
    }
}

impl DerefMut for CacheSession {
    fn deref_mut(&mut self) -> &mut Cache {
        &mut self.cache
    }
}

impl Drop for CacheSession {
    fn drop(&mut self) {
        if !self.persisted {
            if let Err(e) = self.persist() {
                error!("failed to save cache to {}: {}", self.path.display(), e);
            }
        }
    }
}
