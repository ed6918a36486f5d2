//! Facebook Wall
//!
//! Facade over configuration, fetch and render. One `render` call makes at
//! most one request and returns either the complete markup or an error.

use serde_json::Value;
use tracing::{info, warn};

use crate::config::WallOptions;
use crate::domain::{Language, WallError};
use crate::ports::FeedSource;
use crate::render::html::escape;
use crate::render::{render_error, WallRenderer};
use crate::services::GraphClient;

/// Wall widget for one Facebook page
pub struct FacebookWall<S = GraphClient> {
    facebook_id: Option<String>,
    access_token: Option<String>,
    options: WallOptions,
    source: S,
}

impl FacebookWall<GraphClient> {
    /// Create a wall for a page id and access token
    pub fn new(facebook_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            facebook_id: Some(facebook_id.into()),
            access_token: Some(access_token.into()),
            options: WallOptions::default(),
            source: GraphClient::new(),
        }
    }
}

impl Default for FacebookWall<GraphClient> {
    fn default() -> Self {
        Self {
            facebook_id: None,
            access_token: None,
            options: WallOptions::default(),
            source: GraphClient::new(),
        }
    }
}

impl<S: FeedSource> FacebookWall<S> {
    /// Create a wall reading from a custom feed source
    pub fn from_source(
        facebook_id: Option<String>,
        access_token: Option<String>,
        source: S,
    ) -> Self {
        Self {
            facebook_id,
            access_token,
            options: WallOptions::default(),
            source,
        }
    }

    /// Replace the feed source, keeping id, token and options
    pub fn with_source<T: FeedSource>(self, source: T) -> FacebookWall<T> {
        FacebookWall {
            facebook_id: self.facebook_id,
            access_token: self.access_token,
            options: self.options,
            source,
        }
    }

    pub fn with_options(mut self, options: WallOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_facebook_id(&mut self, id: impl Into<String>) {
        self.facebook_id = Some(id.into());
    }

    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    /// Switch language. Unsupported codes are ignored; returns whether the
    /// language was applied.
    pub fn set_language(&mut self, lang: &str) -> bool {
        match lang.parse::<Language>() {
            Ok(lang) => {
                self.options.lang = lang;
                true
            }
            Err(_) => {
                warn!(lang = %lang, "Ignoring unsupported wall language");
                false
            }
        }
    }

    /// Merge a JSON object of option overrides (unknown keys are ignored)
    pub fn set_options(&mut self, overrides: &Value) -> Result<(), WallError> {
        self.options.merge(overrides)
    }

    pub fn options(&self) -> &WallOptions {
        &self.options
    }

    pub fn facebook_id(&self) -> Option<&str> {
        self.facebook_id.as_deref()
    }

    fn credentials(&self) -> Result<(&str, &str), WallError> {
        let id = self
            .facebook_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(WallError::MissingFacebookId)?;
        let token = self
            .access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or(WallError::MissingAccessToken)?;
        Ok((id, token))
    }

    /// Fetch the feed and render all visible posts
    pub async fn render(&self) -> Result<String, WallError> {
        let (id, token) = self.credentials()?;

        let feed = self.source.fetch_feed(id, token, &self.options).await?;
        let html = WallRenderer::new(id, &self.options).render(&feed.data);

        info!(page_id = %id, posts = feed.data.len(), bytes = html.len(), "Wall rendered");
        Ok(html)
    }

    /// Like `render`, but failures become a user-visible error block
    pub async fn render_or_error(&self) -> String {
        match self.render().await {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, "Wall render failed");
                render_error(&e, self.options.lang)
            }
        }
    }

    /// Raw feed JSON inside `<pre>`, for debugging
    pub async fn raw_dump(&self) -> Result<String, WallError> {
        let (id, token) = self.credentials()?;
        let payload = self.source.fetch_raw(id, token, &self.options).await?;

        let pretty = serde_json::to_string_pretty(&payload)
            .map_err(|e| WallError::MalformedResponse(e.to_string()))?;
        Ok(format!("<pre>{}</pre>", escape(&pretty)))
    }
}
