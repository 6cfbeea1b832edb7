//! Assertion implementations

mod file_count;

pub use file_count::FileCountAssertion;
