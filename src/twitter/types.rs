// Twitter API request and response types.
// Defines the user timeline parameter set and the slice of a status we keep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RestroomError, Result};

/// Format of `created_at` in API responses, e.g. `Wed Aug 27 13:08:45 +0000 2008`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Maximum `count` accepted by the user timeline endpoint.
pub const MAX_PAGE_SIZE: u32 = 200;

/// A status (tweet) as returned by the REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub created_at: String,
    #[serde(default)]
    pub place: Option<Place>,
}

impl Status {
    /// Parse `created_at` and normalize it to UTC.
    pub fn created_at_time(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|source| RestroomError::Timestamp {
                value: self.created_at.clone(),
                source,
            })
    }

    /// Place name, or an empty string when no place is attached.
    pub fn place_name(&self) -> &str {
        self.place.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }
}

/// Geographic place attached to a status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub name: String,
}

/// Query parameters for `statuses/user_timeline`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineParams {
    pub screen_name: String,
    pub count: u32,
    pub exclude_replies: bool,
    pub include_rts: bool,
    pub trim_user: bool,
    pub contributor_details: bool,
    /// Only return statuses with an id less than or equal to this one.
    pub max_id: Option<i64>,
}

impl TimelineParams {
    /// Full pages including replies and retweets, without embedded user objects.
    pub fn new(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            count: MAX_PAGE_SIZE,
            exclude_replies: false,
            include_rts: true,
            trim_user: true,
            contributor_details: false,
            max_id: None,
        }
    }

    /// Key/value pairs as sent on the wire.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let flag = |b: bool| String::from(if b { "1" } else { "0" });
        let mut query = vec![
            ("contributor_details", flag(self.contributor_details)),
            ("count", self.count.to_string()),
            ("exclude_replies", flag(self.exclude_replies)),
            ("include_rts", flag(self.include_rts)),
            ("screen_name", self.screen_name.clone()),
            ("trim_user", flag(self.trim_user)),
        ];
        if let Some(max_id) = self.max_id {
            query.push(("max_id", max_id.to_string()));
        }
        query
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
