//! Ordered traversal over the children of a container node.
//!
//! Two interfaces are provided. [`EntryCursor`] preserves the original
//! enumerator protocol exactly: it starts at position −1 (the convention
//! [`EntryCursor::move_next`]'s pre-increment expects), while
//! [`EntryCursor::reset`] sets the position to 0 — that asymmetry is carried
//! over as observed rather than fixed. [`Entries`] is the conventional Rust
//! [`Iterator`] over `(key, child)` pairs for ergonomic consumption.

use crate::error::{JotError, Result};
use crate::value::{Kind, Value};

/// A stateful cursor over the children of an Object or Array node.
///
/// Constructing one over a scalar node is the hard-fail
/// [`JotError::NotAContainer`].
#[derive(Debug)]
pub struct EntryCursor<'a> {
    node: &'a Value,
    position: isize,
}

impl<'a> EntryCursor<'a> {
    /// Wrap a container node, positioned before the first child.
    pub fn new(node: &'a Value) -> Result<Self> {
        match node.kind() {
            Kind::Object | Kind::Array => Ok(EntryCursor { node, position: -1 }),
            kind => Err(JotError::NotAContainer { kind }),
        }
    }

    /// Advance the cursor. Returns false once the position reaches the
    /// child count.
    pub fn move_next(&mut self) -> bool {
        self.position += 1;
        (self.position as usize) < self.node.len()
    }

    /// The child at the cursor, or `None` when the cursor is before the
    /// first child or past the last. Object cursors yield values only; keys
    /// are obtained separately by positional lookup ([`Value::key_at`]).
    pub fn current(&self) -> Option<&'a Value> {
        if self.position < 0 {
            return None;
        }
        self.node.children().get(self.position as usize)
    }

    /// Set the position to 0. Note this differs from the constructor's
    /// initial −1; after a reset the cursor already stands *on* the first
    /// child rather than before it.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Iterator over `(key, child)` pairs in insertion order. The key is `None`
/// for Array elements.
pub struct Entries<'a> {
    node: &'a Value,
    index: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Option<&'a str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.node.children().get(self.index)?;
        let key = self.node.keys().get(self.index).map(String::as_str);
        self.index += 1;
        Some((key, child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.node.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl Value {
    /// Iterate over children in order. Empty for scalar nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.children().iter()
    }

    /// Iterate over `(key, child)` pairs in insertion order. Keys are
    /// `Some` only on Object nodes. Empty for scalar nodes.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            node: self,
            index: 0,
        }
    }
}
