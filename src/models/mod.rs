//! Data models for the Rooli client

mod draft;
mod media;
mod payload;
mod platform;
mod post;
mod profile;
mod user;

pub use draft::{ContentOverride, MAX_SEGMENT_MEDIA, PostDraft, ThreadSegment};
pub use media::MediaFile;
pub use payload::{CreatePostPayload, OverridePayload, ThreadPayload};
pub use platform::Platform;
pub use post::{ContentType, PostStatus, ScheduledPost};
pub use profile::SocialProfile;
pub use user::User;
