//! Server configuration from the environment (`.env` supported)

use anyhow::{Context, Result};
use fbwall::{Language, WallOptions};
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Settings read at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub page_id: Option<String>,
    pub access_token: Option<String>,
    pub options: WallOptions,
}

impl ServerConfig {
    /// Read `FBWALL_*` variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind = lookup("FBWALL_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .context("FBWALL_BIND must be a socket address")?;

        let mut options = WallOptions::default();
        if let Some(raw) = lookup("FBWALL_OPTIONS") {
            let overrides: serde_json::Value =
                serde_json::from_str(&raw).context("FBWALL_OPTIONS must be JSON")?;
            options
                .merge(&overrides)
                .context("Invalid value in FBWALL_OPTIONS")?;
        }
        if let Some(lang) = lookup("FBWALL_LANG") {
            options.lang = lang
                .parse::<Language>()
                .map_err(anyhow::Error::msg)
                .context("FBWALL_LANG must be en or de")?;
        }

        Ok(Self {
            bind,
            page_id: lookup("FBWALL_PAGE_ID").filter(|v| !v.is_empty()),
            access_token: lookup("FBWALL_ACCESS_TOKEN").filter(|v| !v.is_empty()),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind.port(), 8000);
        assert!(config.page_id.is_none());
        assert_eq!(config.options, WallOptions::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FBWALL_BIND", "127.0.0.1:9090"),
            ("FBWALL_PAGE_ID", "42"),
            ("FBWALL_ACCESS_TOKEN", "secret"),
            ("FBWALL_LANG", "de"),
            ("FBWALL_OPTIONS", r#"{"numPosts": 8}"#),
        ]))
        .unwrap();

        assert_eq!(config.bind.port(), 9090);
        assert_eq!(config.page_id.as_deref(), Some("42"));
        assert_eq!(config.options.lang, Language::De);
        assert_eq!(config.options.num_posts, 8);
    }

    #[test]
    fn test_rejects_bad_language() {
        assert!(ServerConfig::from_lookup(lookup(&[("FBWALL_LANG", "fr")])).is_err());
    }
}
