//! Test case descriptors
//!
//! A descriptor is a YAML document with a `When` block naming the trigger
//! and a `Then` block naming the assertion.

mod loader;
mod params;

pub use loader::{normalize_shorthand, Descriptor};
pub use params::{FromParameter, Parameters};
