// Incremental timeline fetcher.
// Walks a user's timeline backward from the cached tail and merges new tweets.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::cache::{Cache, Tweet};
use crate::config::Credentials;
use crate::error::Result;
use crate::twitter::{Status, TimelineParams, TwitterClient};

/// Upper bound on page requests per run, to stay well inside the API's
/// per-15-minute request budget.
pub const MAX_REQUESTS: usize = 10;

/// Anything that can serve pages of a user's timeline.
#[async_trait]
pub trait TimelineSource {
    async fn user_timeline(&mut self, params: &TimelineParams) -> Result<Vec<Status>>;
}

/// Outcome of a successful fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub requests: usize,
    pub added: usize,
}

/// Sign in with `credentials` and extend `user`'s cached history.
///
/// The client lives only for the duration of this call.
pub async fn fetch_more(
    cache: &mut Cache,
    user: &str,
    credentials: Credentials,
) -> Result<FetchSummary> {
    let mut client = TwitterClient::new(credentials)?;
    fetch_from(&mut client, cache, user).await
}

/// Extend `user`'s cached history with older tweets from `source`.
///
/// Each request asks for tweets older than the last cached one. An error on
/// the first request is returned; an error or an empty page afterwards ends
/// the run with whatever was merged so far. At most [`MAX_REQUESTS`] pages are
/// requested.
pub async fn fetch_from<S: TimelineSource + ?Sized>(
    source: &mut S,
    cache: &mut Cache,
    user: &str,
) -> Result<FetchSummary> {
    let mut params = TimelineParams::new(user);
    let mut seen: HashSet<i64> = HashSet::new();
    let mut summary = FetchSummary::default();

    while summary.requests < MAX_REQUESTS {
        // Assumes the cached history ends with its oldest tweet.
        if let Some(last) = cache.history(user).last() {
            let max_id = last.id - 1;
            debug!("using max_id {}", max_id);
            params.max_id = Some(max_id);
        }

        debug!("fetching page {} for {}", summary.requests + 1, user);
        let first = summary.requests == 0;
        let page = source.user_timeline(&params).await;
        summary.requests += 1;

        let page = match page {
            Ok(page) => page,
            Err(e) if first => return Err(e),
            Err(e) => {
                info!("stopping after {} requests: {}", summary.requests, e);
                break;
            }
        };
        debug!("retrieved {} tweets", page.len());
        if page.is_empty() {
            info!("no older tweets for {}", user);
            break;
        }

        let history = cache.history_mut(user);
        for status in page {
            if !seen.insert(status.id) {
                debug!("skipping duplicate tweet {}", status.id);
                continue;
            }
            history.push(Tweet {
                created_at: status.created_at_time()?,
                id: status.id,
                place: status.place_name().to_string(),
            });
            summary.added += 1;
        }
    }

    info!(
        "fetched {} new tweets for {} in {} requests",
        summary.added, user, summary.requests
    );
    Ok(summary)
}
