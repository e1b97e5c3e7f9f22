//! Scheduled post model (as stored by the backend)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Regular feed post
    #[default]
    Post,
    /// Short-form video
    Reel,
    /// Ephemeral story
    Story,
    /// Multi-part thread
    Thread,
}

impl ContentType {
    /// Get all content types
    pub const fn all() -> &'static [Self] {
        &[Self::Post, Self::Reel, Self::Story, Self::Thread]
    }

    /// The wire form the backend uses
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Reel => "REEL",
            Self::Story => "STORY",
            Self::Thread => "THREAD",
        }
    }

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Reel => "Reel",
            Self::Story => "Story",
            Self::Thread => "Thread",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "post" => Some(Self::Post),
            "reel" => Some(Self::Reel),
            "story" => Some(Self::Story),
            "thread" => Some(Self::Thread),
            _ => None,
        }
    }
}

/// Lifecycle status of a post on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    /// Saved but not scheduled
    Draft,
    /// Waiting for its scheduled time
    Scheduled,
    /// Waiting for approval
    PendingApproval,
    /// Currently being published
    Publishing,
    /// Published to all destinations
    Published,
    /// Publishing failed
    Failed,
}

impl PostStatus {
    /// The wire form the backend uses
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Scheduled => "SCHEDULED",
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::Publishing => "PUBLISHING",
            Self::Published => "PUBLISHED",
            Self::Failed => "FAILED",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "SCHEDULED" => Some(Self::Scheduled),
            "PENDING_APPROVAL" => Some(Self::PendingApproval),
            "PUBLISHING" => Some(Self::Publishing),
            "PUBLISHED" => Some(Self::Published),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Get emoji for status
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Draft => "📝",
            Self::Scheduled => "⏳",
            Self::PendingApproval => "👀",
            Self::Publishing => "📤",
            Self::Published => "✅",
            Self::Failed => "❌",
        }
    }
}

/// A post as listed/browsed from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    /// Backend identifier
    pub id: String,
    /// Root content
    pub content: String,
    /// Content kind
    #[serde(default)]
    pub content_type: ContentType,
    /// Current lifecycle status
    pub status: PostStatus,
    /// Destination profile ids
    #[serde(default)]
    pub social_profile_ids: Vec<String>,
    /// Attached media ids
    #[serde(default)]
    pub media_ids: Vec<String>,
    /// IANA timezone the schedule was expressed in
    pub timezone: String,
    /// When the post goes out
    pub scheduled_at: DateTime<Utc>,
    /// When the post was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ScheduledPost {
    /// Get a short preview of the content (for list display)
    pub fn preview(&self, max_len: usize) -> String {
        let content = self.content.replace('\n', " ");
        if content.chars().count() <= max_len {
            content
        } else {
            let cut: String = content.chars().take(max_len.saturating_sub(3)).collect();
            format!("{cut}...")
        }
    }

    /// Human-readable time until publication
    pub fn time_until(&self) -> String {
        let now = Utc::now();
        if self.scheduled_at <= now {
            return "now".to_string();
        }

        let seconds = (self.scheduled_at - now).num_seconds();
        if seconds < 60 {
            format!("{seconds}s")
        } else if seconds < 3600 {
            format!("{}m", seconds / 60)
        } else if seconds < 86400 {
            format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
        } else {
            format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
        }
    }

    /// Format scheduled time for display
    pub fn scheduled_time_display(&self) -> String {
        self.scheduled_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}
