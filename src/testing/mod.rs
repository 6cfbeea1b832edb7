//! Test case execution
//!
//! Builds a test case from a descriptor and runs it inside a scratch
//! directory that is cleaned up afterwards.

mod case;
mod runner;
mod scratch;

pub use case::TestCase;
pub use runner::{run, run_descriptor, TestResult};
pub use scratch::ScratchDir;
