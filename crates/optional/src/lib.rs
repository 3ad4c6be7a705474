//! optional: an inline `Optional<T>` holding zero or one value without heap
//! allocation, with explicit construct, assign, reset and destroy behaviour.
//!
//! Reading an empty container is a logic error reported as
//! [`BadOptionalAccess`]; check [`Optional::has_value`] first.

pub mod error;
pub mod optional;
pub mod slot;

pub use error::BadOptionalAccess;
pub use optional::Optional;
pub use slot::Slot;
