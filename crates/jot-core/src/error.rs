//! Error types for the hard-fail operations of the document tree.
//!
//! Only two things in this crate ever return an error: bounds-checked
//! positional access and constructing a cursor over a scalar node. Everything
//! else follows the soft-warn policy — it logs through [`log::warn!`] and
//! either no-ops or returns a type default (see the crate docs on the dual
//! failure policy).

use crate::value::Kind;
use thiserror::Error;

/// Errors raised by the hard-fail operations on a [`crate::Value`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JotError {
    /// A positional read or write addressed an index past the child count.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A cursor was constructed over a node that has no children to walk.
    #[error("cannot iterate over a {kind} node")]
    NotAContainer { kind: Kind },
}

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, JotError>;
