//! Common paths for Rooli data storage
//!
//! All client data lives under ~/.config/rooli/ on every platform:
//! - config.toml - User configuration
//! - session.enc - Encrypted session state

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the Rooli data directory (~/.config/rooli/)
pub fn rooli_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let dir = home.join(".config").join("rooli");
    fs::create_dir_all(&dir).context("Failed to create rooli directory")?;
    Ok(dir)
}

/// Get the config file path (~/.config/rooli/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(rooli_dir()?.join("config.toml"))
}

/// Get the session file path (~/.config/rooli/session.enc)
pub fn session_path() -> Result<PathBuf> {
    Ok(rooli_dir()?.join("session.enc"))
}
