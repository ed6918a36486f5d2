//! Wall configuration
//!
//! Options controlling what is fetched and how posts are rendered.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::{Language, WallError};

const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// Options for a wall render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallOptions {
    /// Widget language
    pub lang: Language,
    /// Number of posts requested from the feed
    pub num_posts: u32,
    /// Drop posts not written by the page itself
    pub just_own_posts: bool,
    pub show_likes: bool,
    pub show_comments: bool,
    pub show_date: bool,
    /// Add the `hyphenate` class to every post
    pub hyphenate: bool,
    /// Wrap messages in typographic quotes
    pub quotes: bool,
    /// Comments requested and rendered per post
    pub comment_limit: u32,
    /// Likes requested per post
    pub like_limit: u32,
    /// Counts above this are displayed as `{max_count}+`
    pub max_count: u64,
    /// Graph API fields requested for each post
    pub fields: Vec<String>,
    pub graph_url: String,
    /// Optional API version segment, e.g. `v2.0`
    pub graph_version: Option<String>,
    pub timeout_secs: u64,
    /// Query parameters appended to embedded YouTube players.
    /// Numbers and booleans are accepted and stored as strings.
    #[serde(deserialize_with = "deserialize_youtube")]
    pub youtube: BTreeMap<String, String>,
}

fn default_fields() -> Vec<String> {
    [
        "id",
        "message",
        "from",
        "to",
        "link",
        "name",
        "picture",
        "type",
        "created_time",
        "comments",
        "likes",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_youtube() -> BTreeMap<String, String> {
    [
        ("vq", "large"),
        ("modestbranding", "1"),
        ("showinfo", "0"),
        ("autohide", "1"),
        ("wmode", "transparent"),
        ("html5", "1"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn deserialize_youtube<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            Value::Number(n) => Ok((key, n.to_string())),
            Value::Bool(b) => Ok((key, if b { "1" } else { "0" }.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "invalid value for youtube.{key}: {other}"
            ))),
        })
        .collect()
}

impl Default for WallOptions {
    fn default() -> Self {
        Self {
            lang: Language::En,
            num_posts: 15,
            just_own_posts: true,
            show_likes: true,
            show_comments: true,
            show_date: true,
            hyphenate: false,
            quotes: true,
            comment_limit: 25,
            like_limit: 500,
            max_count: 499,
            fields: default_fields(),
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            graph_version: None,
            timeout_secs: 30,
            youtube: default_youtube(),
        }
    }
}

impl WallOptions {
    /// Apply a JSON object of overrides.
    ///
    /// Keys may be given in snake_case or camelCase. Unknown keys are
    /// ignored. If any known key has a value of the wrong type the options
    /// are left untouched and an error is returned.
    pub fn merge(&mut self, overrides: &Value) -> Result<(), WallError> {
        let Some(overrides) = overrides.as_object() else {
            return Err(WallError::invalid_option("options", "expected an object"));
        };

        let mut current = serde_json::to_value(&*self)
            .map_err(|e| WallError::invalid_option("options", e))?;
        let Some(target) = current.as_object_mut() else {
            return Err(WallError::invalid_option("options", "expected an object"));
        };

        let mut applied = Vec::new();
        for (key, value) in overrides {
            let key = to_snake_case(key);
            if target.contains_key(&key) {
                target.insert(key.clone(), value.clone());
                applied.push(key);
            } else {
                debug!(key = %key, "Ignoring unknown wall option");
            }
        }

        let merged: WallOptions = serde_json::from_value(current).map_err(|e| {
            WallError::invalid_option(applied.join(","), e)
        })?;
        *self = merged;

        Ok(())
    }

    pub fn with_language(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_num_posts(mut self, num_posts: u32) -> Self {
        self.num_posts = num_posts;
        self
    }

    pub fn with_just_own_posts(mut self, enable: bool) -> Self {
        self.just_own_posts = enable;
        self
    }

    pub fn with_comments(mut self, enable: bool) -> Self {
        self.show_comments = enable;
        self
    }

    pub fn with_likes(mut self, enable: bool) -> Self {
        self.show_likes = enable;
        self
    }

    /// Point the client at a different Graph API host (used by tests)
    pub fn with_graph_url(mut self, url: impl Into<String>) -> Self {
        self.graph_url = url.into();
        self
    }

    pub fn with_graph_version(mut self, version: impl Into<String>) -> Self {
        self.graph_version = Some(version.into());
        self
    }
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
