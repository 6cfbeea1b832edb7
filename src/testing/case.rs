//! Test case assembly

use std::path::Path;

use crate::behavior::{resolve_assertion, resolve_trigger, Assertion, Trigger};
use crate::common::Result;
use crate::descriptor::Descriptor;

/// A trigger and the assertion checked after it
#[derive(Debug)]
pub struct TestCase {
    trigger: Box<dyn Trigger>,
    assertion: Box<dyn Assertion>,
}

impl TestCase {
    /// Resolve both behaviors of a parsed descriptor
    pub fn from_descriptor(descriptor: &Descriptor) -> Result<Self> {
        let trigger = resolve_trigger(&descriptor.when)?;
        let assertion = resolve_assertion(&descriptor.then)?;
        Ok(Self { trigger, assertion })
    }

    /// Load the descriptor at `path` and resolve it
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_descriptor(&Descriptor::load(path)?)
    }

    pub fn trigger(&self) -> &dyn Trigger {
        self.trigger.as_ref()
    }

    pub fn assertion(&self) -> &dyn Assertion {
        self.assertion.as_ref()
    }
}
