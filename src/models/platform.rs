//! Social platform definitions

use serde::{Deserialize, Serialize};

/// Social platforms the backend can connect profiles for
///
/// This is a closed enumeration: unknown platform strings are rejected
/// (`from_str` returns `None`, deserialization fails) rather than falling
/// back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    /// X (Twitter)
    Twitter,
    /// Instagram
    Instagram,
    /// Facebook
    Facebook,
    /// LinkedIn
    Linkedin,
}

impl Platform {
    /// Get all supported platforms
    pub const fn all() -> &'static [Self] {
        &[Self::Twitter, Self::Instagram, Self::Facebook, Self::Linkedin]
    }

    /// Get the display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Linkedin => "LinkedIn",
        }
    }

    /// Get the emoji icon
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Twitter => "🐦",
            Self::Instagram => "📷",
            Self::Facebook => "📘",
            Self::Linkedin => "💼",
        }
    }

    /// Get the color for display (hex)
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Twitter => "#1DA1F2",   // Twitter blue
            Self::Instagram => "#E1306C", // Instagram magenta
            Self::Facebook => "#1877F2",  // Facebook blue
            Self::Linkedin => "#0A66C2",  // LinkedIn blue
        }
    }

    /// The wire form the backend uses (e.g. "TWITTER")
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "TWITTER",
            Self::Instagram => "INSTAGRAM",
            Self::Facebook => "FACEBOOK",
            Self::Linkedin => "LINKEDIN",
        }
    }

    /// Built-in maximum content length, if the platform imposes one
    ///
    /// Only Twitter enforces a strict limit; the other platforms accept
    /// long-form content. Overridable per workspace via the `[limits]`
    /// section of the config file, see [`crate::limits::CharacterLimits`].
    pub const fn default_char_limit(&self) -> Option<usize> {
        match self {
            Self::Twitter => Some(280),
            Self::Instagram | Self::Facebook | Self::Linkedin => None,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "twitter" | "x" => Some(Self::Twitter),
            "instagram" | "ig" => Some(Self::Instagram),
            "facebook" | "fb" => Some(Self::Facebook),
            "linkedin" | "li" => Some(Self::Linkedin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_is_rejected() {
        assert_eq!(Platform::from_str("myspace"), None);
        assert!(serde_json::from_str::<Platform>("\"MYSPACE\"").is_err());
    }

    #[test]
    fn wire_form_is_screaming_case() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"LINKEDIN\"");
        let parsed: Platform = serde_json::from_str("\"TWITTER\"").unwrap();
        assert_eq!(parsed, Platform::Twitter);
    }

    #[test]
    fn only_twitter_is_limited_by_default() {
        assert_eq!(Platform::Twitter.default_char_limit(), Some(280));
        for platform in [Platform::Instagram, Platform::Facebook, Platform::Linkedin] {
            assert_eq!(platform.default_char_limit(), None);
        }
    }
}
