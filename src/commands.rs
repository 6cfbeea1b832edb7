//! CLI argument definitions
//!
//! Defines the clap arguments for the runner.

use clap::Args;
use std::path::PathBuf;

use crate::common::config::OutputFormat;

#[derive(Args, Debug)]
pub struct RunOptions {
    /// Path to the descriptor file (YAML with When/Then sections)
    pub descriptor: Option<PathBuf>,

    /// List the registered triggers and assertions, then exit
    #[arg(long)]
    pub list_behaviors: bool,

    /// Output format of the result (default: from config, else text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
