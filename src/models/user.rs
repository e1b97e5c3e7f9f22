//! Authenticated user model

use serde::{Deserialize, Serialize};

/// The logged-in user, as returned by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier
    pub id: String,
    /// Email address
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Role within the organization
    pub role: String,
    /// Preferred IANA timezone
    pub timezone: String,
    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Whether the email address has been verified
    #[serde(default)]
    pub is_email_verified: bool,
}

impl User {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
