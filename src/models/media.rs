//! Uploaded media metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file stored by the backend's media service
///
/// The client only stores and forwards the identifier; file bytes are never
/// interpreted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    /// Backend identifier
    pub id: String,
    /// Stored filename
    pub filename: String,
    /// Name the file was uploaded with
    pub original_name: String,
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Size in bytes, as reported by the backend
    pub size: String,
    /// Public URL
    pub url: String,
    /// Thumbnail URL, if the backend generated one
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Pixel width, for images and video
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height, for images and video
    #[serde(default)]
    pub height: Option<u32>,
    /// Upload time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MediaFile {
    /// Whether this is an image
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Whether this is a video
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}
