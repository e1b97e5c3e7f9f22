//! # Rooli 📆
//!
//! A terminal client for the Rooli social-media scheduler.
//!
//! ## Overview
//!
//! Rooli schedules posts across connected social profiles from a single
//! draft. Compose once; content that exceeds a platform's character limit
//! is split automatically into an ordered thread bound to that platform's
//! profiles, while the other platforms receive the full text (or a
//! per-profile override).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          CLI                                │
//! │   Parses commands and drives the composer event-by-event    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │    Composer     │ │       API       │ │     Config      │
//! │                 │ │                 │ │                 │
//! │ • Draft state   │ │ • Auth          │ │ • Load/Save     │
//! │ • Thread split  │ │ • Profiles      │ │ • Timezones     │
//! │ • Validation    │ │ • Posts/Media   │ │ • Char limits   │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Session     │ │     Models      │ │    Schedule     │
//! │                 │ │                 │ │                 │
//! │ • Tokens        │ │ • Platform      │ │ • Time parsing  │
//! │ • Workspace     │ │ • Draft/Post    │ │ • RFC 3339 out  │
//! │ • Encrypted     │ │ • Payloads      │ │                 │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — REST client for the backend
//! - [`composer`] — draft state, thread splitting, submission assembly
//! - [`config`] — configuration management
//! - [`limits`] — per-platform character limits
//! - [`models`] — data models (Platform, PostDraft, ScheduledPost, ...)
//! - [`schedule`] — schedule-time parsing
//! - [`session`] — authenticated session state
//!
//! ## Example
//!
//! ```
//! use rooli::composer::Composer;
//! use rooli::limits::CharacterLimits;
//!
//! let mut composer = Composer::new(CharacterLimits::new());
//! composer.set_content("hello world");
//! assert!(composer.draft().threads.is_empty());
//! ```

#![doc(html_root_url = "https://docs.rs/rooli/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::return_self_not_must_use)]

pub mod api;
pub mod composer;
pub mod config;
pub mod limits;
pub mod models;
pub mod paths;
pub mod schedule;
pub mod session;

// Re-export main types for convenience
pub use api::ApiClient;
pub use composer::Composer;
pub use config::Config;
pub use limits::CharacterLimits;
pub use models::{Platform, PostDraft, ScheduledPost, SocialProfile};
pub use session::Session;

/// ASCII logo for the application
pub const LOGO: &str = r"
                 ___
  _______  ___  / (_)
 / __/ _ \/ _ \/ / /
/_/  \___/\___/_/_/
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
