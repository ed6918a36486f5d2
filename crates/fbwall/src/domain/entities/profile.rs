//! Profile Entity
//!
//! The `from` / `to` actors attached to posts, comments and likes.

use serde::{Deserialize, Serialize};

/// A user or page as referenced by the Graph API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Public Facebook URL of this profile
    pub fn url(&self) -> String {
        format!("https://facebook.com/{}", self.id)
    }
}

/// The `to` field of a post: the profiles a post was addressed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipients {
    #[serde(default)]
    pub data: Vec<Profile>,
}
