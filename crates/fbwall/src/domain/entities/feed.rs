//! Feed Response
//!
//! Top-level body of `GET /{page-id}/feed`.

use serde::{Deserialize, Serialize};

use super::post::Post;

/// Cursor links returned alongside a feed page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// One page of wall posts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub data: Vec<Post>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}
