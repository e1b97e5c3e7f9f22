//! Draft validation and submission payload assembly

use std::collections::HashSet;

use thiserror::Error;

use crate::limits::CharacterLimits;
use crate::models::{
    CreatePostPayload, OverridePayload, PostDraft, SocialProfile, ThreadPayload,
};
use crate::schedule;

/// Why a draft cannot be submitted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// Content is required
    #[error("post content is empty")]
    EmptyContent,
    /// At least one destination profile is required
    #[error("no destination profiles selected")]
    NoDestinations,
    /// A timezone is required
    #[error("timezone is required")]
    MissingTimezone,
    /// The timezone is not in the configured enumeration
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    /// A schedule time is required
    #[error("schedule time is required")]
    MissingScheduleTime,
}

/// Check the submission preconditions for a draft
///
/// `timezones` is the configuration-driven enumeration of allowed schedule
/// timezones.
pub fn validate(draft: &PostDraft, timezones: &[String]) -> Result<(), ComposeError> {
    if draft.content.trim().is_empty() {
        return Err(ComposeError::EmptyContent);
    }
    if draft.profile_ids.is_empty() {
        return Err(ComposeError::NoDestinations);
    }
    if draft.timezone.is_empty() {
        return Err(ComposeError::MissingTimezone);
    }
    if !timezones.iter().any(|tz| tz == &draft.timezone) {
        return Err(ComposeError::UnknownTimezone(draft.timezone.clone()));
    }
    if draft.scheduled_at.is_none() {
        return Err(ComposeError::MissingScheduleTime);
    }
    Ok(())
}

/// Assemble the backend payload from a validated draft
///
/// Pure transformation, no side effects. [`validate`] passing is a caller
/// precondition and is not re-checked here. Thread segments are submitted
/// only when a limited platform is among the selected profiles; each
/// segment's targets default to the selected limited-platform profile ids
/// and are always filtered down to the current selection.
pub fn build_payload(
    draft: &PostDraft,
    profiles: &[SocialProfile],
    limits: &CharacterLimits,
) -> CreatePostPayload {
    let limited_ids: Vec<String> = profiles
        .iter()
        .filter(|p| limits.is_limited(p.platform))
        .map(|p| p.id.clone())
        .collect();
    let selected: HashSet<&str> = profiles.iter().map(|p| p.id.as_str()).collect();

    let threads: Vec<ThreadPayload> = if limited_ids.is_empty() {
        Vec::new()
    } else {
        draft
            .threads
            .iter()
            .map(|segment| {
                let target_profile_ids = if segment.target_profile_ids.is_empty() {
                    limited_ids.clone()
                } else {
                    segment
                        .target_profile_ids
                        .iter()
                        .filter(|id| selected.contains(id.as_str()))
                        .cloned()
                        .collect()
                };
                ThreadPayload {
                    content: segment.content.clone(),
                    media_ids: segment.media_ids.clone(),
                    target_profile_ids,
                }
            })
            .collect()
    };

    CreatePostPayload {
        content: draft.content.clone(),
        content_type: draft.content_type,
        social_profile_ids: draft.profile_ids.clone(),
        media_ids: draft.media_ids.clone(),
        timezone: draft.timezone.clone(),
        scheduled_at: draft
            .scheduled_at
            .map(schedule::format_scheduled_at)
            .unwrap_or_default(),
        is_auto_schedule: draft.auto_schedule.then_some(true),
        overrides: draft
            .overrides
            .iter()
            .map(|o| OverridePayload {
                social_profile_id: o.social_profile_id.clone(),
                content: o.content.clone(),
            })
            .collect(),
        threads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, ThreadSegment};
    use chrono::{TimeZone, Utc};

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

    fn timezones() -> Vec<String> {
        vec!["Europe/London".to_string(), "America/New_York".to_string()]
    }

    fn valid_draft() -> PostDraft {
        let mut draft = PostDraft::new();
        draft.content = "hello".to_string();
        draft.profile_ids = vec!["tw1".to_string()];
        draft.timezone = "Europe/London".to_string();
        draft.scheduled_at = Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
        draft
    }

    #[test]
    fn validate_catches_each_precondition() {
        let tzs = timezones();

        let mut draft = valid_draft();
        draft.content = "  ".to_string();
        assert_eq!(validate(&draft, &tzs), Err(ComposeError::EmptyContent));

        let mut draft = valid_draft();
        draft.profile_ids.clear();
        assert_eq!(validate(&draft, &tzs), Err(ComposeError::NoDestinations));

        let mut draft = valid_draft();
        draft.timezone = String::new();
        assert_eq!(validate(&draft, &tzs), Err(ComposeError::MissingTimezone));

        let mut draft = valid_draft();
        draft.timezone = "Mars/Olympus_Mons".to_string();
        assert_eq!(
            validate(&draft, &tzs),
            Err(ComposeError::UnknownTimezone("Mars/Olympus_Mons".into()))
        );

        let mut draft = valid_draft();
        draft.scheduled_at = None;
        assert_eq!(validate(&draft, &tzs), Err(ComposeError::MissingScheduleTime));

        assert_eq!(validate(&valid_draft(), &tzs), Ok(()));
    }

    #[test]
    fn thread_targets_default_to_limited_profiles() {
        let mut draft = valid_draft();
        draft.threads.push(ThreadSegment {
            content: "tail".to_string(),
            media_ids: Vec::new(),
            target_profile_ids: Vec::new(),
        });
        let profiles = [
            profile("tw1", Platform::Twitter),
            profile("li1", Platform::Linkedin),
        ];

        let payload = build_payload(&draft, &profiles, &CharacterLimits::new());
        assert_eq!(payload.threads.len(), 1);
        assert_eq!(
            payload.threads[0].target_profile_ids,
            vec!["tw1".to_string()]
        );
    }

    #[test]
    fn threads_are_dropped_without_a_limited_platform() {
        let mut draft = valid_draft();
        draft.profile_ids = vec!["li1".to_string()];
        draft.threads.push(ThreadSegment {
            content: "orphan".to_string(),
            media_ids: Vec::new(),
            target_profile_ids: vec!["tw1".to_string()],
        });
        let profiles = [profile("li1", Platform::Linkedin)];

        let payload = build_payload(&draft, &profiles, &CharacterLimits::new());
        assert!(payload.threads.is_empty());
    }

    #[test]
    fn thread_targets_are_filtered_to_the_selection() {
        let mut draft = valid_draft();
        draft.threads.push(ThreadSegment {
            content: "tail".to_string(),
            media_ids: Vec::new(),
            target_profile_ids: vec!["tw1".to_string(), "tw-gone".to_string()],
        });
        let profiles = [profile("tw1", Platform::Twitter)];

        let payload = build_payload(&draft, &profiles, &CharacterLimits::new());
        assert_eq!(
            payload.threads[0].target_profile_ids,
            vec!["tw1".to_string()]
        );
    }

    #[test]
    fn payload_uses_the_backend_wire_names() {
        let mut draft = valid_draft();
        draft.auto_schedule = true;
        draft.set_override("tw1", "short");
        let profiles = [profile("tw1", Platform::Twitter)];

        let value =
            serde_json::to_value(build_payload(&draft, &profiles, &CharacterLimits::new()))
                .unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("contentType"));
        assert!(obj.contains_key("socialProfileIds"));
        assert!(obj.contains_key("scheduledAt"));
        assert_eq!(obj["isAutoSchedule"], serde_json::json!(true));
        assert_eq!(obj["overrides"][0]["socialProfileId"], "tw1");
        assert_eq!(obj["scheduledAt"], "2026-03-01T09:00:00Z");
        // Empty collections are omitted from the wire form entirely.
        assert!(!obj.contains_key("mediaIds"));
        assert!(!obj.contains_key("threads"));
    }
}
