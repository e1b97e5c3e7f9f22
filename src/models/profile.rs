//! Connected social profile model

use serde::{Deserialize, Serialize};

use super::Platform;

/// A social account connected to a workspace, eligible to receive posts
///
/// Returned read-only by the backend's profile directory; the client never
/// creates or mutates these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    /// Backend identifier
    pub id: String,
    /// Which platform the profile lives on
    pub platform: Platform,
    /// Handle on the platform
    pub username: String,
    /// Display name
    pub name: String,
    /// Whether the connection is currently usable
    pub is_active: bool,
    /// Follower count, when the platform reports one
    #[serde(default)]
    pub follower_count: Option<u64>,
    /// Avatar URL
    #[serde(default)]
    pub picture: Option<String>,
}

impl SocialProfile {
    /// One-line label for lists and pickers
    pub fn label(&self) -> String {
        format!("{} {} (@{})", self.platform.emoji(), self.name, self.username)
    }
}
