//! Post Entity
//!
//! One entry of a page feed.

use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::connection::Connection;
use super::profile::{Profile, Recipients};
use crate::domain::value_objects::PostType;

/// A wall post as returned by the Graph API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Composite id: `{page_id}_{post_id}`
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub from: Option<Profile>,
    #[serde(default)]
    pub to: Option<Recipients>,
    #[serde(default)]
    pub link: Option<String>,
    /// Title of the linked object (video title for video posts)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: PostType,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub comments: Connection<Comment>,
    #[serde(default)]
    pub likes: Connection<Profile>,
}

impl Post {
    /// The post part of the composite id, used in permalink URLs
    pub fn post_id(&self) -> &str {
        match self.id.split_once('_') {
            Some((_, post_id)) => post_id,
            None => &self.id,
        }
    }

    /// Message text, if non-blank
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }

    /// Whether the post was written by the given profile id
    pub fn is_authored_by(&self, id: &str) -> bool {
        self.from.as_ref().is_some_and(|from| from.id == id)
    }

    /// Larger version of the attached picture
    pub fn large_picture(&self) -> Option<String> {
        self.picture
            .as_deref()
            .map(|picture| picture.replace("_s.jpg", "_n.jpg"))
    }

    /// Whether the post was addressed to someone (wall-to-wall post)
    pub fn has_recipients(&self) -> bool {
        self.to.as_ref().is_some_and(|to| !to.data.is_empty())
    }
}
