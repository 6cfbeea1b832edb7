//! Behavior registry
//!
//! The closed set of triggers and assertions a descriptor can name. Entries
//! are keyed by canonical name (see [`canonical_name`](super::canonical_name)).

use super::assertions::FileCountAssertion;
use super::triggers::FileCreatedTrigger;
use super::{Assertion, FromParameters, Trigger};
use crate::common::Result;
use crate::descriptor::Parameters;

/// A registered behavior
pub struct Registration<B: ?Sized> {
    /// Canonical name, e.g. `FileCreatedTrigger`
    pub name: &'static str,
    /// Identifier as written in descriptors, e.g. `File Created`
    pub identifier: &'static str,
    /// Brief description
    pub description: &'static str,
    /// Builds the behavior from its descriptor block, validating parameters
    pub construct: fn(&Parameters) -> Result<Box<B>>,
}

fn construct_trigger<T>(params: &Parameters) -> Result<Box<dyn Trigger>>
where
    T: Trigger + FromParameters + 'static,
{
    Ok(Box::new(T::from_parameters(params)?))
}

fn construct_assertion<A>(params: &Parameters) -> Result<Box<dyn Assertion>>
where
    A: Assertion + FromParameters + 'static,
{
    Ok(Box::new(A::from_parameters(params)?))
}

/// All available triggers
static TRIGGERS: &[Registration<dyn Trigger>] = &[Registration {
    name: "FileCreatedTrigger",
    identifier: "File Created",
    description: "Creates an empty file with_name in in_directory",
    construct: construct_trigger::<FileCreatedTrigger>,
}];

/// All available assertions
static ASSERTIONS: &[Registration<dyn Assertion>] = &[Registration {
    name: "FileCountAssertion",
    identifier: "File Count",
    description: "Waits for after, then expects file_count entries in in_directory",
    construct: construct_assertion::<FileCountAssertion>,
}];

/// Get all registered triggers
pub fn triggers() -> &'static [Registration<dyn Trigger>] {
    TRIGGERS
}

/// Get all registered assertions
pub fn assertions() -> &'static [Registration<dyn Assertion>] {
    ASSERTIONS
}

/// Find an entry by canonical name
pub fn find<B: ?Sized + 'static>(
    table: &'static [Registration<B>],
    name: &str,
) -> Option<&'static Registration<B>> {
    table.iter().find(|entry| entry.name == name)
}
