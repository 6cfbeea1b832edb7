//! Test runner implementation
//!
//! Executes the trigger, then evaluates the assertion. The trigger has fully
//! completed before the assertion starts waiting.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::case::TestCase;
use super::scratch::ScratchDir;
use crate::common::config::WorkspaceConfig;
use crate::common::Result;

/// Result of a test run
#[derive(Debug, Serialize)]
pub struct TestResult {
    pub descriptor: Option<PathBuf>,
    pub trigger: &'static str,
    pub assertion: &'static str,
    pub passed: bool,
}

/// Execute the trigger and evaluate the assertion of a test case
pub fn run(test_case: TestCase) -> Result<TestResult> {
    let trigger = test_case.trigger();
    let assertion = test_case.assertion();

    info!("Executing {}", trigger.name());
    trigger.execute()?;

    info!("Checking {}", assertion.name());
    let passed = assertion.check()?;
    info!("{} evaluated to {}", assertion.name(), passed);

    Ok(TestResult {
        descriptor: None,
        trigger: trigger.name(),
        assertion: assertion.name(),
        passed,
    })
}

/// Run the descriptor at `path` inside the configured scratch directory
///
/// The scratch directory exists before the descriptor is resolved, since
/// behaviors validate their directories on construction. Its files are
/// removed afterwards unless the workspace config says otherwise.
pub fn run_descriptor(path: &Path, workspace: &WorkspaceConfig) -> Result<TestResult> {
    let mut scratch = ScratchDir::create(&workspace.scratch_dir)?;
    if !workspace.clean_up {
        scratch = scratch.keep_files();
    }

    let test_case = TestCase::load(path)?;
    let mut result = run(test_case)?;
    result.descriptor = Some(path.to_path_buf());

    scratch.clean_up()?;
    Ok(result)
}
