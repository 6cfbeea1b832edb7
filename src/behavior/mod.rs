//! Triggers and assertions
//!
//! A trigger performs an action, an assertion checks a condition afterwards.
//! Concrete behaviors are constructed from a descriptor block and validate
//! their parameters during construction.

pub mod assertions;
pub mod registry;
pub mod resolver;
pub mod triggers;

use std::fmt;

use crate::common::Result;
use crate::descriptor::Parameters;

pub use resolver::{resolve_assertion, resolve_trigger};

/// A side-effecting action run before the assertion
pub trait Trigger: fmt::Debug {
    /// Registry name of the behavior, e.g. `FileCreatedTrigger`
    fn name(&self) -> &'static str;

    /// Perform the action
    fn execute(&self) -> Result<()>;
}

/// A condition evaluated after the trigger has run
pub trait Assertion: fmt::Debug {
    /// Registry name of the behavior, e.g. `FileCountAssertion`
    fn name(&self) -> &'static str;

    /// Evaluate the condition, waiting first if the assertion is configured to
    fn check(&self) -> Result<bool>;
}

/// Construction from a descriptor block
///
/// Implementations read and validate their own parameters and fail with
/// `MissingParameter` or `IllegalParameter`.
pub trait FromParameters: Sized {
    fn from_parameters(params: &Parameters) -> Result<Self>;
}

/// The two kinds of behavior a test case is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorKind {
    Trigger,
    Assertion,
}

impl BehaviorKind {
    /// Key holding the identifier in the descriptor block
    pub fn id_key(self) -> &'static str {
        match self {
            BehaviorKind::Trigger => "trigger_id",
            BehaviorKind::Assertion => "assertion_id",
        }
    }

    /// Suffix appended to the identifier to form the registry name
    pub fn suffix(self) -> &'static str {
        match self {
            BehaviorKind::Trigger => "Trigger",
            BehaviorKind::Assertion => "Assertion",
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BehaviorKind::Trigger => write!(f, "trigger"),
            BehaviorKind::Assertion => write!(f, "assertion"),
        }
    }
}

/// Registry name for a free-text identifier
///
/// All whitespace is removed and the kind suffix appended:
/// `"File Created"` becomes `"FileCreatedTrigger"`.
pub fn canonical_name(kind: BehaviorKind, identifier: &str) -> String {
    let mut name: String = identifier.split_whitespace().collect();
    name.push_str(kind.suffix());
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(
            canonical_name(BehaviorKind::Trigger, "File Created"),
            "FileCreatedTrigger"
        );
        assert_eq!(
            canonical_name(BehaviorKind::Assertion, " File \t Count "),
            "FileCountAssertion"
        );
        assert_eq!(canonical_name(BehaviorKind::Trigger, ""), "Trigger");
    }

    #[test]
    fn test_id_keys() {
        assert_eq!(BehaviorKind::Trigger.id_key(), "trigger_id");
        assert_eq!(BehaviorKind::Assertion.id_key(), "assertion_id");
    }
}
