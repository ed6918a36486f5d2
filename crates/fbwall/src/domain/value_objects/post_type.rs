//! PostType - Graph API `type` of a feed entry

use serde::{Deserialize, Serialize};

/// Kind of wall post, selects the rendering branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostType {
    Photo,
    Video,
    Link,
    #[default]
    Status,
    Other(String),
}

impl From<String> for PostType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "photo" => PostType::Photo,
            "video" => PostType::Video,
            "link" => PostType::Link,
            "status" => PostType::Status,
            _ => PostType::Other(value),
        }
    }
}

impl From<PostType> for String {
    fn from(value: PostType) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostType::Photo => write!(f, "photo"),
            PostType::Video => write!(f, "video"),
            PostType::Link => write!(f, "link"),
            PostType::Status => write!(f, "status"),
            PostType::Other(kind) => write!(f, "{}", kind),
        }
    }
}
