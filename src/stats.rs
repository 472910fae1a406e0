// Tweet statistics.
// Buckets a cached history by UTC hour, UTC weekday and place.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike};

use crate::cache::Tweet;

/// Weekday names, indexed the same way as [`Stats::weekdays`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Distributions computed over one user's history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    /// Tweets per UTC hour of day.
    pub hours: [u32; 24],
    /// Tweets per UTC weekday, Sunday first.
    pub weekdays: [u32; 7],
    /// Tweets per non-empty place, sorted by name.
    pub places: BTreeMap<String, u32>,
    /// Widest place name in characters.
    pub place_width: usize,
}

impl Stats {
    pub fn from_history(history: &[Tweet]) -> Self {
        let mut stats = Self {
            total: history.len(),
            ..Self::default()
        };

        for tweet in history {
            stats.hours[tweet.created_at.hour() as usize] += 1;
            stats.weekdays[tweet.created_at.weekday().num_days_from_sunday() as usize] += 1;

            if !tweet.place.is_empty() {
                *stats.places.entry(tweet.place.clone()).or_default() += 1;
                stats.place_width = stats.place_width.max(tweet.place.chars().count());
            }
        }

        stats
    }
}
