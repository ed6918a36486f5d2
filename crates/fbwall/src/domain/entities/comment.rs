//! Comment Entity

use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// A comment on a wall post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub from: Option<Profile>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_time: Option<String>,
}
