// Twitter API HTTP client.
// Handles OAuth signing, rate limit tracking, and request/response processing.

use chrono::Utc;
use reqwest::{
    Client, Response, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::config::Credentials;
use crate::error::{RestroomError, Result};

use super::oauth;
use super::types::RateLimit;

pub const TWITTER_API_BASE: &str = "https://api.twitter.com";

/// Twitter REST API client with OAuth 1.0a user credentials.
pub struct TwitterClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    rate_limit: RateLimit,
}

impl TwitterClient {
    /// Create a client talking to the public API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(TWITTER_API_BASE, credentials)
    }

    /// Create a client against another host, e.g. a local mock server.
    pub fn with_base_url(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("restroom"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RestroomError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            rate_limit: RateLimit::default(),
        })
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Make a signed GET request with query parameters.
    pub async fn get_with_params(
        &mut self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let header = oauth::authorization_header(
            &self.credentials,
            "GET",
            &url,
            params,
            &oauth::nonce(),
            Utc::now().timestamp(),
        )?;

        // Encode the query the same way it was signed.
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", oauth::percent_encode(k), oauth::percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let full_url = if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query)
        };

        debug!("GET {}", full_url);
        let response = self
            .client
            .get(&full_url)
            .header(
                AUTHORIZATION,
                HeaderValue::from_str(&header).map_err(|e| RestroomError::Other(e.to_string()))?,
            )
            .send()
            .await
            .map_err(RestroomError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        let header = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        if let Some(limit) = header("x-rate-limit-limit") {
            self.rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-rate-limit-remaining") {
            self.rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-rate-limit-reset") {
            self.rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::UNAUTHORIZED => Err(RestroomError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(RestroomError::NotFound(url))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let reset_at = chrono::DateTime::from_timestamp(self.rate_limit.reset as i64, 0)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(RestroomError::RateLimited { reset_at })
            }
            status => Err(RestroomError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}
