//! when-then - declarative trigger/assertion test cases
//!
//! A descriptor names one trigger (an action, e.g. creating a file) and one
//! assertion (a condition checked afterwards, e.g. counting files). This
//! library parses descriptors, resolves the named behaviors through a closed
//! registry and runs them.

pub mod behavior;
pub mod cli;
pub mod commands;
pub mod common;
pub mod descriptor;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use descriptor::{Descriptor, Parameters};
pub use testing::{TestCase, TestResult};
