//! Post composition and thread assembly
//!
//! The composer owns the in-progress [`PostDraft`] and keeps one derived
//! invariant: the root content always fits the tightest character limit
//! among the selected destination profiles. Overflow text is moved into
//! ordered thread segments targeted at the limited-platform profiles.
//!
//! There is no reactive machinery here: every mutation goes through an
//! explicit event method (`set_content`, `select_profile`, ...) which ends
//! by synchronously re-running the split over the current snapshot. Each
//! run is a single linear pass, so calling it on every keystroke stays
//! cheap. Stale state (segments or overrides whose profile was deselected,
//! or segments left behind after content shrank) is deliberately kept until
//! the user removes it; [`Composer::warnings`] reports it instead.

mod chunk;
mod submit;

pub use chunk::split_into_chunks;
pub use submit::{ComposeError, build_payload, validate};

use chrono::{DateTime, Utc};

use crate::limits::CharacterLimits;
use crate::models::{
    ContentType, CreatePostPayload, MAX_SEGMENT_MEDIA, Platform, PostDraft, SocialProfile,
    ThreadSegment,
};

/// A condition worth surfacing to the user before submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeWarning {
    /// Thread segments exist but no limited platform is selected; they will
    /// not be submitted
    OrphanedThreads {
        /// How many segments are orphaned
        segments: usize,
    },
    /// An override references a profile that is no longer selected
    StaleOverride {
        /// The deselected profile
        profile_id: String,
    },
}

impl std::fmt::Display for ComposeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrphanedThreads { segments } => write!(
                f,
                "{segments} thread segment(s) have no limited platform selected and will not be posted"
            ),
            Self::StaleOverride { profile_id } => {
                write!(f, "override for deselected profile {profile_id}")
            }
        }
    }
}

/// Composition session: draft state plus the selection and limit tables
/// needed to keep it normalized
pub struct Composer {
    draft: PostDraft,
    profiles: Vec<SocialProfile>,
    limits: CharacterLimits,
}

impl Composer {
    /// Start a new composing session with an empty draft
    pub fn new(limits: CharacterLimits) -> Self {
        Self {
            draft: PostDraft::new(),
            profiles: Vec::new(),
            limits,
        }
    }

    /// The current draft
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// The selected profiles, in selection order
    pub fn profiles(&self) -> &[SocialProfile] {
        &self.profiles
    }

    /// The active limit table
    pub fn limits(&self) -> &CharacterLimits {
        &self.limits
    }

    /// Replace the main content
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
        self.rechunk();
    }

    /// Add a destination profile; no-op if already selected
    pub fn select_profile(&mut self, profile: &SocialProfile) {
        if self.profiles.iter().any(|p| p.id == profile.id) {
            return;
        }
        self.profiles.push(profile.clone());
        self.draft.profile_ids.push(profile.id.clone());
        self.rechunk();
    }

    /// Remove a destination profile; returns whether it was selected
    ///
    /// Thread segments and overrides referencing the profile are kept, not
    /// pruned; see [`Composer::warnings`].
    pub fn deselect_profile(&mut self, profile_id: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.id != profile_id);
        self.draft.profile_ids.retain(|id| id != profile_id);
        let removed = self.profiles.len() != before;
        if removed {
            self.rechunk();
        }
        removed
    }

    /// Set the content kind
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.draft.content_type = content_type;
    }

    /// Set the schedule timezone
    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.draft.timezone = timezone.into();
    }

    /// Set the publication time
    pub fn set_scheduled_at(&mut self, at: DateTime<Utc>) {
        self.draft.scheduled_at = Some(at);
    }

    /// Let the backend pick the publication slot
    pub fn set_auto_schedule(&mut self, auto: bool) {
        self.draft.auto_schedule = auto;
    }

    /// Attach media to the root post
    pub fn attach_media(&mut self, media_id: impl Into<String>) {
        self.draft.media_ids.push(media_id.into());
    }

    /// Attach media to the thread segment at `index`
    ///
    /// Returns `false` when the segment does not exist or already carries
    /// [`MAX_SEGMENT_MEDIA`] attachments.
    pub fn attach_segment_media(&mut self, index: usize, media_id: impl Into<String>) -> bool {
        match self.draft.threads.get_mut(index) {
            Some(segment) if segment.media_ids.len() < MAX_SEGMENT_MEDIA => {
                segment.media_ids.push(media_id.into());
                true
            }
            _ => false,
        }
    }

    /// Set or replace the override for a profile (last write wins)
    pub fn set_override(&mut self, profile_id: &str, content: impl Into<String>) {
        self.draft.set_override(profile_id, content);
    }

    /// Remove the override for a profile; returns whether one existed
    pub fn remove_override(&mut self, profile_id: &str) -> bool {
        self.draft.remove_override(profile_id)
    }

    /// Explicitly remove the thread segment at `index`
    pub fn remove_segment(&mut self, index: usize) -> bool {
        if index < self.draft.threads.len() {
            self.draft.threads.remove(index);
            true
        } else {
            false
        }
    }

    /// Explicitly drop all thread segments
    pub fn clear_threads(&mut self) {
        self.draft.threads.clear();
    }

    /// Stale state the user should know about before submitting
    pub fn warnings(&self) -> Vec<ComposeWarning> {
        let mut warnings = Vec::new();

        if !self.draft.threads.is_empty() && self.effective_limit().is_none() {
            warnings.push(ComposeWarning::OrphanedThreads {
                segments: self.draft.threads.len(),
            });
        }

        for o in &self.draft.overrides {
            if !self.profiles.iter().any(|p| p.id == o.social_profile_id) {
                warnings.push(ComposeWarning::StaleOverride {
                    profile_id: o.social_profile_id.clone(),
                });
            }
        }

        warnings
    }

    /// Validate the draft against the configured timezone enumeration
    pub fn validate(&self, timezones: &[String]) -> Result<(), ComposeError> {
        submit::validate(&self.draft, timezones)
    }

    /// Assemble the submission payload
    ///
    /// Precondition: [`Composer::validate`] passed. The draft should be
    /// discarded after this.
    pub fn payload(&self) -> CreatePostPayload {
        submit::build_payload(&self.draft, &self.profiles, &self.limits)
    }

    /// Platforms of the currently selected profiles
    fn selected_platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.profiles.iter().map(|p| p.platform)
    }

    /// The tightest limit among the selected profiles, if any
    fn effective_limit(&self) -> Option<usize> {
        self.limits.effective_limit(self.selected_platforms())
    }

    /// Ids of selected profiles on limited platforms
    fn limited_profile_ids(&self) -> Vec<String> {
        self.profiles
            .iter()
            .filter(|p| self.limits.is_limited(p.platform))
            .map(|p| p.id.clone())
            .collect()
    }

    /// Re-derive the root/threads split from the current snapshot
    ///
    /// Runs only when a limited platform is selected and the root content
    /// exceeds the effective limit; otherwise existing segments are left
    /// untouched. Re-running on already-compliant state is a no-op, so the
    /// operation is idempotent. Media attached to an existing segment is
    /// carried over to the rebuilt segment at the same index.
    fn rechunk(&mut self) {
        let Some(limit) = self.effective_limit() else {
            return;
        };
        if self.draft.content.chars().count() <= limit {
            return;
        }

        let mut chunks = split_into_chunks(&self.draft.content, limit).into_iter();
        let targets = self.limited_profile_ids();

        self.draft.content = chunks.next().unwrap_or_default();
        let previous = std::mem::take(&mut self.draft.threads);
        self.draft.threads = chunks
            .enumerate()
            .map(|(i, content)| ThreadSegment {
                content,
                media_ids: previous
                    .get(i)
                    .map(|segment| segment.media_ids.clone())
                    .unwrap_or_default(),
                target_profile_ids: targets.clone(),
            })
            .collect();

        tracing::debug!(
            limit,
            segments = self.draft.threads.len(),
            "split content into thread"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, platform: Platform) -> SocialProfile {
        SocialProfile {
            id: id.to_string(),
            platform,
            username: format!("user_{id}"),
            name: format!("User {id}"),
            is_active: true,
            follower_count: None,
            picture: None,
        }
    }

    fn twitter_composer() -> Composer {
        let mut composer = Composer::new(CharacterLimits::new());
        composer.select_profile(&profile("tw1", Platform::Twitter));
        composer
    }

    #[test]
    fn overflow_moves_into_thread_segments() {
        let mut composer = twitter_composer();
        composer.set_content("a".repeat(300));

        let draft = composer.draft();
        assert_eq!(draft.content, "a".repeat(280));
        assert_eq!(draft.threads.len(), 1);
        assert_eq!(draft.threads[0].content, "a".repeat(20));
        assert_eq!(draft.threads[0].target_profile_ids, vec!["tw1".to_string()]);
    }

    #[test]
    fn short_content_is_left_alone() {
        let mut composer = twitter_composer();
        composer.set_content("hello world");

        assert_eq!(composer.draft().content, "hello world");
        assert!(composer.draft().threads.is_empty());
    }

    #[test]
    fn unlimited_profile_does_not_loosen_the_limit() {
        let mut composer = twitter_composer();
        composer.select_profile(&profile("li1", Platform::Linkedin));
        composer.set_content("b".repeat(400));

        let draft = composer.draft();
        assert_eq!(draft.content.chars().count(), 280);
        assert_eq!(draft.threads.len(), 1);
        // Segments target only the limited-platform profile.
        assert_eq!(draft.threads[0].target_profile_ids, vec!["tw1".to_string()]);
    }

    #[test]
    fn no_limited_platform_means_no_splitting() {
        let mut composer = Composer::new(CharacterLimits::new());
        composer.select_profile(&profile("li1", Platform::Linkedin));
        composer.set_content("c".repeat(5000));

        assert_eq!(composer.draft().content.chars().count(), 5000);
        assert!(composer.draft().threads.is_empty());
    }

    #[test]
    fn rechunk_is_idempotent_on_compliant_state() {
        let mut composer = twitter_composer();
        composer.set_content("a".repeat(300));
        let before = composer.draft().clone();

        // Both of these re-trigger the split on already-compliant state.
        let root = composer.draft().content.clone();
        composer.set_content(root);
        composer.select_profile(&profile("fb1", Platform::Facebook));

        assert_eq!(composer.draft().content, before.content);
        assert_eq!(composer.draft().threads, before.threads);
    }

    #[test]
    fn segment_media_survives_rechunking() {
        let mut composer = twitter_composer();
        composer.set_content("a".repeat(600)); // root + 2 segments
        assert!(composer.attach_segment_media(0, "media-1"));

        composer.set_content("a".repeat(700)); // still >= 1 trailing segment
        let draft = composer.draft();
        assert_eq!(draft.threads[0].media_ids, vec!["media-1".to_string()]);
        assert!(draft.threads[1].media_ids.is_empty());
    }

    #[test]
    fn segment_media_is_bounded() {
        let mut composer = twitter_composer();
        composer.set_content("a".repeat(300));

        for i in 0..MAX_SEGMENT_MEDIA {
            assert!(composer.attach_segment_media(0, format!("m{i}")));
        }
        assert!(!composer.attach_segment_media(0, "one-too-many"));
        assert!(!composer.attach_segment_media(9, "no-such-segment"));
    }

    #[test]
    fn deselecting_the_limited_platform_orphans_the_thread() {
        let mut composer = twitter_composer();
        composer.select_profile(&profile("li1", Platform::Linkedin));
        composer.set_content("a".repeat(600));
        assert_eq!(composer.draft().threads.len(), 2);

        assert!(composer.deselect_profile("tw1"));

        // Segments stay in the draft, untouched by further edits.
        let kept = composer.draft().threads.clone();
        composer.set_content("a".repeat(900));
        assert_eq!(composer.draft().threads, kept);
        assert_eq!(composer.draft().content.chars().count(), 900);

        assert!(
            composer
                .warnings()
                .contains(&ComposeWarning::OrphanedThreads { segments: 2 })
        );
    }

    #[test]
    fn tightest_limit_wins_across_platforms() {
        let mut limits = CharacterLimits::new();
        limits.set(Platform::Instagram, 150);
        let mut composer = Composer::new(limits);
        composer.select_profile(&profile("tw1", Platform::Twitter));
        composer.select_profile(&profile("ig1", Platform::Instagram));
        composer.set_content("d".repeat(400));

        let draft = composer.draft();
        assert_eq!(draft.content.chars().count(), 150);
        // Both limited profiles are thread targets.
        assert_eq!(
            draft.threads[0].target_profile_ids,
            vec!["tw1".to_string(), "ig1".to_string()]
        );
    }

    #[test]
    fn stale_override_is_surfaced_not_dropped() {
        let mut composer = twitter_composer();
        let linkedin = profile("li1", Platform::Linkedin);
        composer.select_profile(&linkedin);
        composer.set_override("li1", "longer text for linkedin");

        composer.deselect_profile("li1");

        assert_eq!(
            composer.draft().override_for("li1"),
            Some("longer text for linkedin")
        );
        assert!(composer.warnings().iter().any(|w| matches!(
            w,
            ComposeWarning::StaleOverride { profile_id } if profile_id == "li1"
        )));

        assert!(composer.remove_override("li1"));
        assert!(composer.warnings().is_empty());
    }

    #[test]
    fn explicit_segment_removal() {
        let mut composer = twitter_composer();
        composer.set_content("a".repeat(600));
        assert_eq!(composer.draft().threads.len(), 2);

        assert!(composer.remove_segment(1));
        assert!(!composer.remove_segment(5));
        assert_eq!(composer.draft().threads.len(), 1);

        composer.clear_threads();
        assert!(composer.draft().threads.is_empty());
    }
}
