//! Resolves descriptor blocks into constructed behaviors
//!
//! Parameter errors raised while constructing a behavior reach the caller
//! unchanged. Only failures of the lookup itself are produced here.

use tracing::debug;

use super::registry::{self, Registration};
use super::{canonical_name, Assertion, BehaviorKind, Trigger};
use crate::common::{Error, Result};
use crate::descriptor::Parameters;

/// Build the trigger named by the `trigger_id` of a `When` block
pub fn resolve_trigger(block: &Parameters) -> Result<Box<dyn Trigger>> {
    resolve(BehaviorKind::Trigger, registry::triggers(), block)
}

/// Build the assertion named by the `assertion_id` of a `Then` block
pub fn resolve_assertion(block: &Parameters) -> Result<Box<dyn Assertion>> {
    resolve(BehaviorKind::Assertion, registry::assertions(), block)
}

pub(crate) fn resolve<B: ?Sized + 'static>(
    kind: BehaviorKind,
    table: &'static [Registration<B>],
    block: &Parameters,
) -> Result<Box<B>> {
    let identifier: String = block.get(kind.id_key())?;
    let name = canonical_name(kind, &identifier);

    let entry = registry::find(table, &name).ok_or(Error::UnknownBehavior {
        kind: kind.id_key(),
    })?;

    debug!(
        "Resolved {kind} '{identifier}' to {name} with parameters [{}]",
        block.keys().collect::<Vec<_>>().join(", ")
    );

    (entry.construct)(block).map_err(|e| {
        if e.is_parameter_error() {
            e
        } else {
            Error::MalformedBehaviorDefinition {
                name,
                reason: e.to_string(),
            }
        }
    })
}
