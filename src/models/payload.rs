//! Wire payloads for the post-creation endpoint

use serde::{Deserialize, Serialize};

use super::ContentType;

/// One per-profile content override on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverridePayload {
    /// Profile the override applies to
    pub social_profile_id: String,
    /// Replacement content
    pub content: String,
}

/// One thread segment on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPayload {
    /// Segment text
    pub content: String,
    /// Attached media ids
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_ids: Vec<String>,
    /// Profiles this segment goes to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_profile_ids: Vec<String>,
}

/// The finalized, backend-ready representation of a post
///
/// Field names follow the backend's camelCase contract exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostPayload {
    /// Root content
    pub content: String,
    /// Content kind
    pub content_type: ContentType,
    /// Destination profile ids
    pub social_profile_ids: Vec<String>,
    /// Media attached to the root post
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_ids: Vec<String>,
    /// IANA timezone the schedule is expressed in
    pub timezone: String,
    /// RFC 3339 publication time
    pub scheduled_at: String,
    /// Let the backend pick the publication slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_schedule: Option<bool>,
    /// Per-profile content overrides
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverridePayload>,
    /// Thread segments following the root post
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threads: Vec<ThreadPayload>,
}
