//! Per-platform character limit configuration
//!
//! Limits count Unicode characters, not bytes. Twitter's built-in 280 comes
//! from [`Platform::default_char_limit`]; any platform can be overridden via
//! the `[limits]` table in `config.toml`, which keeps the limits out of the
//! splitting logic and makes them swappable in tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Platform;

/// Platform → maximum content length mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterLimits {
    overrides: HashMap<Platform, usize>,
}

impl CharacterLimits {
    /// Built-in limits only, no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the limit for one platform
    pub fn set(&mut self, platform: Platform, limit: usize) {
        self.overrides.insert(platform, limit);
    }

    /// The limit for a platform, if it has one
    pub fn limit_for(&self, platform: Platform) -> Option<usize> {
        self.overrides
            .get(&platform)
            .copied()
            .or_else(|| platform.default_char_limit())
    }

    /// Whether a platform imposes any limit
    pub fn is_limited(&self, platform: Platform) -> bool {
        self.limit_for(platform).is_some()
    }

    /// The tightest limit among the given platforms
    ///
    /// `None` when no platform in the set imposes a limit. With several
    /// limited platforms selected at once, the minimum wins.
    pub fn effective_limit<I>(&self, platforms: I) -> Option<usize>
    where
        I: IntoIterator<Item = Platform>,
    {
        platforms
            .into_iter()
            .filter_map(|p| self.limit_for(p))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twitter_limited_by_default() {
        let limits = CharacterLimits::new();
        assert_eq!(limits.limit_for(Platform::Twitter), Some(280));
        assert_eq!(limits.limit_for(Platform::Linkedin), None);
        assert!(limits.is_limited(Platform::Twitter));
        assert!(!limits.is_limited(Platform::Facebook));
    }

    #[test]
    fn effective_limit_ignores_unlimited_platforms() {
        let limits = CharacterLimits::new();
        assert_eq!(
            limits.effective_limit([Platform::Twitter, Platform::Linkedin]),
            Some(280)
        );
        assert_eq!(
            limits.effective_limit([Platform::Facebook, Platform::Instagram]),
            None
        );
        assert_eq!(limits.effective_limit([]), None);
    }

    #[test]
    fn tightest_limit_wins() {
        let mut limits = CharacterLimits::new();
        limits.set(Platform::Instagram, 150);

        assert_eq!(
            limits.effective_limit([Platform::Twitter, Platform::Instagram]),
            Some(150)
        );
    }

    #[test]
    fn overrides_replace_builtins() {
        let mut limits = CharacterLimits::new();
        limits.set(Platform::Twitter, 500);
        assert_eq!(limits.limit_for(Platform::Twitter), Some(500));
    }
}
