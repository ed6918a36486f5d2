//! Graph API client
//!
//! Reads a page feed with a single GET request.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::WallOptions;
use crate::domain::{FeedResponse, WallError};
use crate::ports::FeedSource;

const USER_AGENT: &str = concat!("fbwall/", env!("CARGO_PKG_VERSION"));

/// Build the feed request URL for a page.
///
/// `comments` and `likes` in the field list are expanded into limited
/// edges with a summary, so totals are available without paging.
pub fn feed_url(
    page_id: &str,
    access_token: &str,
    options: &WallOptions,
) -> Result<Url, WallError> {
    let mut url = Url::parse(&options.graph_url)
        .map_err(|e| WallError::invalid_option("graph_url", e))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| WallError::invalid_option("graph_url", "cannot be a base URL"))?;
        segments.pop_if_empty();
        if let Some(version) = options.graph_version.as_deref().filter(|v| !v.is_empty()) {
            segments.push(version);
        }
        segments.push(page_id).push("feed");
    }

    url.query_pairs_mut()
        .append_pair("access_token", access_token)
        .append_pair("limit", &options.num_posts.to_string())
        .append_pair("fields", &field_list(options));

    Ok(url)
}

fn field_list(options: &WallOptions) -> String {
    options
        .fields
        .iter()
        .filter_map(|field| match field.as_str() {
            "comments" if !options.show_comments => None,
            "likes" if !options.show_likes => None,
            "comments" => Some(format!(
                "comments.limit({}).summary(true){{id,from,message,created_time}}",
                options.comment_limit
            )),
            "likes" => Some(format!(
                "likes.limit({}).summary(true){{id,name}}",
                options.like_limit
            )),
            other => Some(other.to_string()),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// reqwest-backed `FeedSource`
#[derive(Clone)]
pub struct GraphClient {
    client: Client,
}

impl GraphClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Use an existing reqwest client (shared connection pool)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn get(&self, url: Url, options: &WallOptions) -> Result<Value, WallError> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(options.timeout_secs))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, "Graph API request failed");
            return Err(map_http_error(status, &body));
        }

        if body.trim().is_empty() {
            return Err(WallError::EmptyResponse);
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| WallError::MalformedResponse(e.to_string()))?;

        // The Graph API occasionally reports errors with a 200 status
        if let Some(message) = error_message(&payload) {
            return Err(WallError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(payload)
    }
}

impl Default for GraphClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for GraphClient {
    async fn fetch_feed(
        &self,
        page_id: &str,
        access_token: &str,
        options: &WallOptions,
    ) -> Result<FeedResponse, WallError> {
        let payload = self.fetch_raw(page_id, access_token, options).await?;

        let feed: FeedResponse = serde_json::from_value(payload)
            .map_err(|e| WallError::MalformedResponse(e.to_string()))?;

        debug!(page_id = %page_id, posts = feed.data.len(), "Fetched page feed");
        Ok(feed)
    }

    async fn fetch_raw(
        &self,
        page_id: &str,
        access_token: &str,
        options: &WallOptions,
    ) -> Result<Value, WallError> {
        let url = feed_url(page_id, access_token, options)?;
        debug!(page_id = %page_id, limit = options.num_posts, "Requesting page feed");

        let payload = self.get(url, options).await?;
        if payload.is_null() {
            return Err(WallError::EmptyResponse);
        }
        Ok(payload)
    }
}

fn error_message(payload: &Value) -> Option<String> {
    payload
        .get("error")
        .and_then(|err| err.get("message"))
        .and_then(|msg| msg.as_str())
        .map(|msg| msg.to_string())
}

fn map_http_error(status: StatusCode, body: &str) -> WallError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| error_message(&json))
        .unwrap_or_else(|| body.to_string());

    WallError::Api {
        status: status.as_u16(),
        message,
    }
}
