//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Scratch directory settings
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Result output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scratch directory the run executes in
#[derive(Debug, Deserialize)]
pub struct WorkspaceConfig {
    /// Directory created before the run, relative to the current directory
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,

    /// Remove the files inside the scratch directory after the run
    #[serde(default = "default_clean_up")]
    pub clean_up: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            scratch_dir: default_scratch_dir(),
            clean_up: default_clean_up(),
        }
    }
}

fn default_scratch_dir() -> PathBuf {
    PathBuf::from("execution")
}

fn default_clean_up() -> bool {
    true
}

/// How the run result is printed
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Bare `true` / `false`
    #[default]
    Text,
    /// A JSON report object
    Json,
}

/// Output configuration
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
