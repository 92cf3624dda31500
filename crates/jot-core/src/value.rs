//! The document tree node: a type-tagged, insertion-ordered, mutable value.
//!
//! A [`Value`] is a single node of a JSON document. Instead of a Rust enum it
//! is a struct carrying a [`Kind`] discriminant plus *every* scalar backing
//! field at once. That layout is load-bearing for two documented behaviors:
//!
//! - **Loose accessors**: reading [`Value::str_value`] on a Number node
//!   returns the string backing field (its default, unless something was
//!   stored there earlier) — it never fails and never converts. Callers are
//!   expected to check [`Value::is_string`] and friends first.
//! - **Deep copy**: [`Value::clone_with_depth`] duplicates every scalar
//!   backing field unconditionally, regardless of which one is authoritative.
//!
//! Objects keep two parallel sequences, `keys` and `children`, always of
//! equal length; position `i` of one corresponds to position `i` of the
//! other. Insertion order is semantically significant and survives every
//! mutation in the field API.
//!
//! # Key design decisions
//!
//! - **Explicit tag switch**: the node's kind changes only through
//!   [`Value::convert_to`] (the typed setters call it), so the data loss of
//!   turning an Object into a String is visible at the call site rather than
//!   a side effect of a property write.
//! - **Semantic equality**: `PartialEq` compares the tag and the
//!   *authoritative* payload only. Stale non-authoritative backing fields do
//!   not make two otherwise-equal trees unequal.

use std::fmt;

/// Discriminant identifying which payload of a [`Value`] is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Bool => "bool",
            Kind::Null => "null",
        };
        f.write_str(name)
    }
}

/// One node of a JSON document tree.
///
/// Created by a typed-literal constructor (`Value::from(...)`,
/// [`Value::object`], [`Value::array`], [`Value::null`]), by
/// [`crate::parse()`], or by deep-copying another node. Mutated through the
/// typed setters and the field/index API (see the `field` module's impl
/// block). A node owns its children exclusively; dropping the root frees the
/// whole subtree.
#[derive(Debug, Clone)]
pub struct Value {
    pub(crate) kind: Kind,
    /// Object field names, parallel to `children`. Empty for every other kind.
    pub(crate) keys: Vec<String>,
    /// Object field values or Array elements.
    pub(crate) children: Vec<Value>,
    pub(crate) str_payload: String,
    pub(crate) float_payload: f64,
    pub(crate) int_payload: i64,
    /// Which numeric representation is authoritative: `5` vs `5.0`.
    pub(crate) is_integer: bool,
    pub(crate) bool_payload: bool,
    /// False while a parse or clone producing this node is still in flight.
    pub(crate) finished: bool,
}

impl Default for Value {
    fn default() -> Self {
        Value::null()
    }
}

impl Value {
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Value {
            kind,
            keys: Vec::new(),
            children: Vec::new(),
            str_payload: String::new(),
            float_payload: 0.0,
            int_payload: 0,
            is_integer: false,
            bool_payload: false,
            finished: true,
        }
    }

    /// A Null node.
    pub fn null() -> Self {
        Value::with_kind(Kind::Null)
    }

    /// An empty Object node.
    pub fn object() -> Self {
        Value::with_kind(Kind::Object)
    }

    /// An empty Array node.
    pub fn array() -> Self {
        Value::with_kind(Kind::Array)
    }

    /// The node's current tag.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_object(&self) -> bool {
        self.kind == Kind::Object
    }

    pub fn is_array(&self) -> bool {
        self.kind == Kind::Array
    }

    pub fn is_string(&self) -> bool {
        self.kind == Kind::String
    }

    pub fn is_number(&self) -> bool {
        self.kind == Kind::Number
    }

    pub fn is_bool(&self) -> bool {
        self.kind == Kind::Bool
    }

    pub fn is_null(&self) -> bool {
        self.kind == Kind::Null
    }

    /// True when the node is a Number whose integer representation is
    /// authoritative. False for every other kind.
    pub fn is_integer(&self) -> bool {
        self.kind == Kind::Number && self.is_integer
    }

    /// Child count. Zero for scalars.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Object field names in insertion order. Empty slice for non-Objects.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Children in order (Object values or Array elements).
    pub fn children(&self) -> &[Value] {
        &self.children
    }

    /// Readiness marker: false only while an in-flight (possibly
    /// asynchronous) parse or clone is still constructing this node. Every
    /// synchronous constructor in this crate produces finished nodes; an
    /// external scheduler that hands `parse` to a worker clears and re-sets
    /// the flag around the call.
    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn set_finished(&mut self, finished: bool) {
        self.finished = finished;
    }

    // ------------------------------------------------------------------
    // Loose scalar accessors
    // ------------------------------------------------------------------
    //
    // Getters read the backing field for their type regardless of the node's
    // actual tag. They never fail and never stringify/convert; a wrong-kind
    // read yields whatever the backing field holds (usually its default).
    // This is a deliberate ergonomic trade-off carried over from the
    // original model, not a bug. Check `is_string()` etc. first.

    /// The string backing field, whatever the node's tag.
    pub fn str_value(&self) -> &str {
        &self.str_payload
    }

    /// The integer backing field narrowed to `i32`, whatever the node's tag.
    pub fn int_value(&self) -> i32 {
        self.int_payload as i32
    }

    /// The integer backing field, whatever the node's tag.
    pub fn long_value(&self) -> i64 {
        self.int_payload
    }

    /// The floating backing field narrowed to `f32`, whatever the node's tag.
    pub fn float_value(&self) -> f32 {
        self.float_payload as f32
    }

    /// The floating backing field, whatever the node's tag.
    pub fn double_value(&self) -> f64 {
        self.float_payload
    }

    /// The boolean backing field, whatever the node's tag.
    pub fn bool_value(&self) -> bool {
        self.bool_payload
    }

    // Setters retag the node first. Retagging a container discards its
    // keys/children — see `convert_to`.

    pub fn set_str(&mut self, value: impl Into<String>) {
        self.convert_to(Kind::String);
        self.str_payload = value.into();
    }

    pub fn set_int(&mut self, value: i32) {
        self.set_long(i64::from(value));
    }

    pub fn set_long(&mut self, value: i64) {
        self.convert_to(Kind::Number);
        self.int_payload = value;
        self.is_integer = true;
    }

    pub fn set_float(&mut self, value: f32) {
        self.set_double(f64::from(value));
    }

    pub fn set_double(&mut self, value: f64) {
        self.convert_to(Kind::Number);
        self.float_payload = value;
        self.is_integer = false;
    }

    pub fn set_bool(&mut self, value: bool) {
        self.convert_to(Kind::Bool);
        self.bool_payload = value;
    }

    /// Switch the node's tag.
    ///
    /// Any prior tree structure is discarded, not merged: leaving (or
    /// re-entering) Object/Array clears `keys` and `children`. Scalar backing
    /// fields are left untouched, which is what the loose getters read.
    /// No-op when the node already has the requested kind.
    pub fn convert_to(&mut self, kind: Kind) {
        if self.kind == kind {
            return;
        }
        self.keys.clear();
        self.children.clear();
        self.kind = kind;
    }

    // ------------------------------------------------------------------
    // Deep copy
    // ------------------------------------------------------------------

    /// Build a fully independent copy of this subtree, truncated at
    /// `max_depth` levels below this node.
    ///
    /// `None` is unbounded (equivalent to `clone()`). `Some(0)` keeps this
    /// node's tag and scalar payloads but instantiates no children — a
    /// structurally valid, childless container. Every scalar backing field is
    /// copied unconditionally, regardless of the source's tag; nothing is
    /// shared between source and copy.
    pub fn clone_with_depth(&self, max_depth: Option<usize>) -> Value {
        let mut copy = Value {
            kind: self.kind,
            keys: Vec::new(),
            children: Vec::new(),
            str_payload: self.str_payload.clone(),
            float_payload: self.float_payload,
            int_payload: self.int_payload,
            is_integer: self.is_integer,
            bool_payload: self.bool_payload,
            finished: false,
        };
        let descend = max_depth.map_or(true, |d| d > 0);
        if descend {
            let child_depth = max_depth.map(|d| d - 1);
            if self.kind == Kind::Object {
                copy.keys = self.keys.clone();
            }
            copy.children = self
                .children
                .iter()
                .map(|child| child.clone_with_depth(child_depth))
                .collect();
        }
        copy.finished = true;
        copy
    }
}

/// Semantic equality: same tag, same authoritative payload, and for
/// containers the same keys and children in the same order.
/// Non-authoritative backing fields and the `finished` flag do not
/// participate.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match self.kind {
            Kind::Object => self.keys == other.keys && self.children == other.children,
            Kind::Array => self.children == other.children,
            Kind::String => self.str_payload == other.str_payload,
            Kind::Number => {
                self.is_integer == other.is_integer
                    && if self.is_integer {
                        self.int_payload == other.int_payload
                    } else {
                        self.float_payload == other.float_payload
                    }
            }
            Kind::Bool => self.bool_payload == other.bool_payload,
            Kind::Null => true,
        }
    }
}

// Typed-literal constructors.

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        let mut v = Value::with_kind(Kind::String);
        v.str_payload = value.to_string();
        v
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        let mut v = Value::with_kind(Kind::String);
        v.str_payload = value;
        v
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::from(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        let mut v = Value::with_kind(Kind::Number);
        v.int_payload = value;
        v.is_integer = true;
        v
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        let mut v = Value::with_kind(Kind::Number);
        v.float_payload = value;
        v.is_integer = false;
        v
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        let mut v = Value::with_kind(Kind::Bool);
        v.bool_payload = value;
        v
    }
}
