//! Failure raised when an empty `Optional` is read.

use thiserror::Error;

/// Access to the value of an empty [`Optional`](crate::Optional).
///
/// This is a logic error: correct callers check
/// [`has_value`](crate::Optional::has_value) first. The fallible accessors
/// return it as an `Err`, the `Deref` impls panic with its message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("bad optional access")]
pub struct BadOptionalAccess;
