//! In-progress composition state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContentType;

/// Maximum media attachments a single thread segment may carry
pub const MAX_SEGMENT_MEDIA: usize = 4;

/// Platform-specific replacement text for the root content
///
/// Zero or one override per profile; writing again for the same profile
/// replaces the previous text (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOverride {
    /// The profile this override applies to
    pub social_profile_id: String,
    /// Replacement content
    pub content: String,
}

/// One unit in the ordered sequence of follow-up posts after the root
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSegment {
    /// Segment text
    pub content: String,
    /// Attached media ids (at most [`MAX_SEGMENT_MEDIA`])
    #[serde(default)]
    pub media_ids: Vec<String>,
    /// Profiles this segment is posted to
    #[serde(default)]
    pub target_profile_ids: Vec<String>,
}

/// The in-progress post being composed
///
/// Created empty when composition starts, mutated through
/// [`crate::composer::Composer`] events, and consumed exactly once at
/// submission. Drafts are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Local identity for this composing session
    pub id: Uuid,
    /// Main (root) content
    pub content: String,
    /// Content kind
    pub content_type: ContentType,
    /// Selected destination profile ids, in selection order
    pub profile_ids: Vec<String>,
    /// Media attached to the root post
    pub media_ids: Vec<String>,
    /// IANA timezone for the schedule
    pub timezone: String,
    /// When the post should go out
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Let the backend pick the publication slot
    pub auto_schedule: bool,
    /// Per-profile content overrides
    pub overrides: Vec<ContentOverride>,
    /// Thread segments following the root post
    pub threads: Vec<ThreadSegment>,
}

impl PostDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            content: String::new(),
            content_type: ContentType::default(),
            profile_ids: Vec::new(),
            media_ids: Vec::new(),
            timezone: String::new(),
            scheduled_at: None,
            auto_schedule: false,
            overrides: Vec::new(),
            threads: Vec::new(),
        }
    }

    /// Get the override text for a profile, if any
    pub fn override_for(&self, profile_id: &str) -> Option<&str> {
        self.overrides
            .iter()
            .find(|o| o.social_profile_id == profile_id)
            .map(|o| o.content.as_str())
    }

    /// Set or replace the override for a profile (last write wins)
    pub fn set_override(&mut self, profile_id: &str, content: impl Into<String>) {
        let content = content.into();
        match self
            .overrides
            .iter_mut()
            .find(|o| o.social_profile_id == profile_id)
        {
            Some(existing) => existing.content = content,
            None => self.overrides.push(ContentOverride {
                social_profile_id: profile_id.to_string(),
                content,
            }),
        }
    }

    /// Remove the override for a profile; returns whether one existed
    pub fn remove_override(&mut self, profile_id: &str) -> bool {
        let before = self.overrides.len();
        self.overrides.retain(|o| o.social_profile_id != profile_id);
        self.overrides.len() != before
    }
}

impl Default for PostDraft {
    fn default() -> Self {
        Self::new()
    }
}
