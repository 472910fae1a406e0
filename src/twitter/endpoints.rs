// Twitter API endpoint functions.
// Typed wrapper around the one REST endpoint restroom needs.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::fetch::TimelineSource;

use super::client::TwitterClient;
use super::types::{Status, TimelineParams};

const USER_TIMELINE: &str = "/1.1/statuses/user_timeline.json";

impl TwitterClient {
    /// Get one page of a user's timeline, newest first.
    ///
    /// The API serves at most 200 statuses per page and only the ~3,200 most
    /// recent statuses of a user overall.
    pub async fn get_user_timeline(&mut self, params: &TimelineParams) -> Result<Vec<Status>> {
        let response = self
            .get_with_params(USER_TIMELINE, &params.to_query())
            .await?;
        let statuses: Vec<Status> = response.json().await?;
        debug!(
            "rate limit: {}/{} remaining",
            self.rate_limit().remaining,
            self.rate_limit().limit
        );
        Ok(statuses)
    }
}

#[async_trait]
impl TimelineSource for TwitterClient {
    async fn user_timeline(&mut self, params: &TimelineParams) -> Result<Vec<Status>> {
        self.get_user_timeline(params).await
    }
}
