//! Session state (encrypted file-based storage)
//!
//! Explicit, passed-around session context: tokens, the authenticated user,
//! and the current organization/workspace. Created at login, updated on
//! workspace switches, cleared at logout. Persisted encrypted with
//! AES-256-GCM in ~/.config/rooli/session.enc; the key is derived from
//! machine-specific identifiers.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use anyhow::{Context, Result, anyhow};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

use crate::models::User;
use crate::paths;

const NONCE_SIZE: usize = 12;

/// The client's session with the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for API calls
    pub access_token: Option<String>,
    /// Token used to refresh the access token
    pub refresh_token: Option<String>,
    /// The authenticated user
    pub user: Option<User>,
    /// Organization the user belongs to
    pub organization_id: Option<String>,
    /// Workspace subsequent commands operate on
    pub workspace_id: Option<String>,
}

impl Session {
    /// Start a fresh session after a successful login
    pub fn login(&mut self, access_token: String, refresh_token: Option<String>, user: User) {
        self.access_token = Some(access_token);
        self.refresh_token = refresh_token;
        self.user = Some(user);
    }

    /// Point the session at a different workspace
    pub fn switch_workspace(&mut self, workspace_id: impl Into<String>) {
        self.workspace_id = Some(workspace_id.into());
    }

    /// Clear everything (logout)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the session holds a usable token
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// The current workspace, or an actionable error
    pub fn require_workspace(&self) -> Result<&str> {
        self.workspace_id
            .as_deref()
            .ok_or_else(|| anyhow!("No workspace selected. Run: rooli workspace <id>"))
    }

    /// Load the session from the default path; missing file means a fresh
    /// unauthenticated session
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::session_path()?)
    }

    /// Load the session from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let encrypted = fs::read(path).context("Failed to read session file")?;
        if encrypted.len() < NONCE_SIZE {
            return Ok(Self::default());
        }

        let (nonce_bytes, ciphertext) = encrypted.split_at(NONCE_SIZE);
        let cipher = Aes256Gcm::new_from_slice(&derive_key())
            .map_err(|_| anyhow!("Invalid session key length"))?;

        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| anyhow!("Failed to decrypt session file"))?;

        serde_json::from_slice(&plaintext).context("Invalid session file contents")
    }

    /// Save the session to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::session_path()?)
    }

    /// Save the session to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let json = serde_json::to_vec(self)?;

        let cipher = Aes256Gcm::new_from_slice(&derive_key())
            .map_err(|_| anyhow!("Invalid session key length"))?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::rng().fill(&mut nonce_bytes);

        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), json.as_slice())
            .map_err(|_| anyhow!("Failed to encrypt session"))?;

        let mut output = nonce_bytes.to_vec();
        output.extend(ciphertext);

        fs::write(path, output).context("Failed to write session file")?;

        // Owner-only on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }
}

/// Derive the encryption key from machine-specific data
fn derive_key() -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(machine_id().as_bytes());
    if let Some(home) = dirs::home_dir() {
        hasher.update(home.to_string_lossy().as_bytes());
    }
    hasher.update(b"rooli-session-v1");
    hasher.finalize().into()
}

/// A stable per-machine identifier
fn machine_id() -> String {
    #[cfg(target_os = "linux")]
    {
        for path in ["/etc/machine-id", "/var/lib/dbus/machine-id"] {
            if let Ok(id) = fs::read_to_string(path) {
                return id.trim().to_string();
            }
        }
    }

    // Fallback: the home directory path is always available via dirs
    dirs::home_dir()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "rooli-fallback-key".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "me@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: "OWNER".to_string(),
            timezone: "Europe/London".to_string(),
            avatar: None,
            is_email_verified: true,
        }
    }

    #[test]
    fn lifecycle_login_switch_clear() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.require_workspace().is_err());

        session.login("token".to_string(), Some("refresh".to_string()), user());
        session.organization_id = Some("org1".to_string());
        session.switch_workspace("ws1");

        assert!(session.is_authenticated());
        assert_eq!(session.require_workspace().unwrap(), "ws1");

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(session.workspace_id.is_none());
    }

    #[test]
    fn encrypted_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.enc");

        let mut session = Session::default();
        session.login("token".to_string(), None, user());
        session.switch_workspace("ws1");
        session.save_to(&path).unwrap();

        // Not stored in the clear
        let raw = std::fs::read(&path).unwrap();
        assert!(!raw.windows(5).any(|w| w == b"token"));

        let loaded = Session::load_from(&path).unwrap();
        assert_eq!(loaded.access_token.as_deref(), Some("token"));
        assert_eq!(loaded.workspace_id.as_deref(), Some("ws1"));
    }

    #[test]
    fn missing_file_is_a_fresh_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.enc");
        let session = Session::load_from(&path).unwrap();
        assert!(!session.is_authenticated());
    }
}
