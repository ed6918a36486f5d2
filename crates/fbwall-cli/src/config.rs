//! Configuration management for fbwall CLI
//!
//! Stores the access token, page shortcuts and wall options in
//! ~/.config/fbwall/config.toml

use anyhow::{Context, Result};
use fbwall::WallOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "fbwall";
const CONFIG_FILE: &str = "config.toml";

/// Shortcut for a Facebook page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub page_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// CLI Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_page: Option<String>,
    #[serde(default)]
    pub pages: BTreeMap<String, Page>,
    /// Wall option overrides, same keys as `WallOptions`
    #[serde(default)]
    pub options: toml::Table,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn set_access_token(&mut self, token: String) {
        self.access_token = Some(token);
    }

    /// Add a page shortcut; the first page becomes the default
    pub fn add_page(&mut self, name: String, page_id: String, display_name: Option<String>) {
        if self.default_page.is_none() {
            self.default_page = Some(name.clone());
        }
        self.pages.insert(
            name,
            Page {
                page_id,
                name: display_name,
            },
        );
    }

    /// Remove a page shortcut
    pub fn remove_page(&mut self, name: &str) -> bool {
        let removed = self.pages.remove(name).is_some();
        if removed && self.default_page.as_deref() == Some(name) {
            self.default_page = None;
        }
        removed
    }

    /// Set default page
    pub fn set_default_page(&mut self, name: String) -> bool {
        if self.pages.contains_key(&name) {
            self.default_page = Some(name);
            true
        } else {
            false
        }
    }

    /// Resolve a page argument: a shortcut name, else a raw page id,
    /// else the default page
    pub fn resolve_page_id(&self, page: Option<&str>) -> Option<String> {
        match page {
            Some(page) => Some(
                self.pages
                    .get(page)
                    .map(|p| p.page_id.clone())
                    .unwrap_or_else(|| page.to_string()),
            ),
            None => self
                .default_page
                .as_ref()
                .and_then(|name| self.pages.get(name))
                .map(|p| p.page_id.clone()),
        }
    }

    /// Wall options with the `[options]` table applied
    pub fn wall_options(&self) -> Result<WallOptions> {
        let mut options = WallOptions::default();
        if !self.options.is_empty() {
            let overrides =
                serde_json::to_value(&self.options).context("Failed to convert [options]")?;
            options
                .merge(&overrides)
                .context("Invalid value in [options]")?;
        }
        Ok(options)
    }
}
