//! Feed Source Port
//!
//! Abstract interface for reading a page feed.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::config::WallOptions;
use crate::domain::{FeedResponse, WallError};

/// Source of wall posts
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and decode the most recent posts of a page
    async fn fetch_feed(
        &self,
        page_id: &str,
        access_token: &str,
        options: &WallOptions,
    ) -> Result<FeedResponse, WallError>;

    /// Fetch the feed as untyped JSON, for inspection
    async fn fetch_raw(
        &self,
        page_id: &str,
        access_token: &str,
        options: &WallOptions,
    ) -> Result<Value, WallError>;
}

#[async_trait]
impl<T: FeedSource + ?Sized> FeedSource for Arc<T> {
    async fn fetch_feed(
        &self,
        page_id: &str,
        access_token: &str,
        options: &WallOptions,
    ) -> Result<FeedResponse, WallError> {
        (**self).fetch_feed(page_id, access_token, options).await
    }

    async fn fetch_raw(
        &self,
        page_id: &str,
        access_token: &str,
        options: &WallOptions,
    ) -> Result<Value, WallError> {
        (**self).fetch_raw(page_id, access_token, options).await
    }
}
