//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/when-then/`
//! - macOS: `~/Library/Application Support/when-then/`
//! - Windows: `%APPDATA%\when-then\`

use std::path::PathBuf;

/// Application name used for platform directories
const APP_NAME: &str = "when-then";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
