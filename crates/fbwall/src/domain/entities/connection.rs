//! Connection - Graph API edge with data and summary

use serde::{Deserialize, Serialize};

/// Summary block returned when an edge is requested with `.summary(true)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// An edge such as `comments` or `likes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Legacy count field, still sent by older API versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            count: None,
            summary: None,
        }
    }
}

impl<T> Connection<T> {
    /// Total number of items, as reported by the API if available
    pub fn reported_total(&self) -> Option<u64> {
        self.summary
            .as_ref()
            .and_then(|s| s.total_count)
            .or(self.count)
    }

    /// Total number of items, falling back to the fetched page size
    pub fn total(&self) -> u64 {
        self.reported_total().unwrap_or(self.data.len() as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
