//! Field and index operations on [`Value`]: get/set/add/remove/rename/move,
//! plus the typed field getter families.
//!
//! Two failure policies coexist here and must not be conflated:
//!
//! - **Hard-fail**: positional access ([`Value::at`], [`Value::at_mut`],
//!   [`Value::set_at`]) is bounds-checked and returns
//!   [`JotError::OutOfBounds`].
//! - **Soft-warn**: the remove/move/rename family and the `*_field_safe`
//!   getters log a warning and no-op (or return a type default) on a bad
//!   key, bad index, or wrong-kind receiver. They never fail.
//!
//! The original model overloaded a single keyed indexer with both "look up"
//! and "create if missing". Here those are two operations:
//! [`Value::try_get`] never mutates, [`Value::get_or_create`] vivifies a
//! Null entry for a missing key before returning it.
//!
//! Duplicate keys are permitted throughout: [`Value::add_field`] performs no
//! uniqueness check, and every keyed lookup resolves to the first match.

use crate::error::{JotError, Result};
use crate::value::{Kind, Value};
use log::warn;

impl Value {
    /// Index of the first entry named `key`, on Objects only.
    fn key_index(&self, key: &str) -> Option<usize> {
        if self.kind != Kind::Object {
            return None;
        }
        self.keys.iter().position(|k| k == key)
    }

    /// Non-mutating keyed lookup. `None` for a missing key or a non-Object
    /// receiver. First match wins when keys are duplicated.
    pub fn try_get(&self, key: &str) -> Option<&Value> {
        self.key_index(key).map(|i| &self.children[i])
    }

    /// Mutable variant of [`Value::try_get`].
    pub fn try_get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self.key_index(key) {
            Some(i) => Some(&mut self.children[i]),
            None => None,
        }
    }

    /// Keyed read that vivifies: a missing key is first added with a Null
    /// value (converting a non-Object receiver the way [`Value::add_field`]
    /// does), then returned.
    pub fn get_or_create(&mut self, key: &str) -> &mut Value {
        let index = match self.key_index(key) {
            Some(i) => i,
            None => {
                self.add_field(key, Value::null());
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Bounds-checked positional read.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let len = self.children.len();
        self.children
            .get(index)
            .ok_or(JotError::OutOfBounds { index, len })
    }

    /// Bounds-checked mutable positional read.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.children.len();
        self.children
            .get_mut(index)
            .ok_or(JotError::OutOfBounds { index, len })
    }

    /// Bounds-checked positional write. The slot must already exist; there
    /// is no auto-grow.
    pub fn set_at(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let slot = self.at_mut(index)?;
        *slot = value.into();
        Ok(())
    }

    /// Key of the entry at `index`, on Objects only.
    pub fn key_at(&self, index: usize) -> Result<&str> {
        let len = self.keys.len();
        self.keys
            .get(index)
            .map(String::as_str)
            .ok_or(JotError::OutOfBounds { index, len })
    }

    /// Whether an Object entry named `key` exists. False for any non-Object
    /// receiver.
    pub fn has_field(&self, key: &str) -> bool {
        self.key_index(key).is_some()
    }

    /// Append an entry. A non-Object receiver is first converted to Object,
    /// synthesizing a key for its previous payload:
    ///
    /// - Array children become entries keyed `"0"`, `"1"`, ...
    /// - a String/Number/Bool payload becomes a single entry keyed
    ///   `"string"`/`"number"`/`"bool"`
    /// - Null becomes an empty object
    ///
    /// No duplicate-key check is performed.
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.promote_to_object();
        self.keys.push(key.into());
        self.children.push(value.into());
    }

    /// Append an element to an Array. A non-Array receiver is first
    /// converted with [`Value::convert_to`], discarding any prior structure
    /// (an Object's keys do not survive; convert explicitly first if that
    /// matters at the call site).
    pub fn push(&mut self, value: impl Into<Value>) {
        self.convert_to(Kind::Array);
        self.children.push(value.into());
    }

    /// Replace the value of an existing entry in place, or append like
    /// [`Value::add_field`] when the key is absent.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        match self.key_index(&key) {
            Some(i) => self.children[i] = value.into(),
            None => self.add_field(key, value),
        }
    }

    /// Remove the entry named `key` from `keys` and `children` in lockstep.
    /// Warns and no-ops on a non-Object receiver or a missing key.
    pub fn remove_field(&mut self, key: &str) {
        if self.kind != Kind::Object {
            warn!("remove_field(\"{key}\") on a {} node; ignoring", self.kind);
            return;
        }
        match self.key_index(key) {
            Some(i) => {
                self.keys.remove(i);
                self.children.remove(i);
            }
            None => warn!("remove_field: no field named \"{key}\"; ignoring"),
        }
    }

    /// Remove the entry at `index`. Works on Objects (key removed in
    /// lockstep) and Arrays. Warns and no-ops on a scalar receiver or an
    /// out-of-range index.
    pub fn remove_at(&mut self, index: usize) {
        if self.kind != Kind::Object && self.kind != Kind::Array {
            warn!("remove_at({index}) on a {} node; ignoring", self.kind);
            return;
        }
        if index >= self.children.len() {
            warn!(
                "remove_at: index {index} out of bounds for length {}; ignoring",
                self.children.len()
            );
            return;
        }
        if self.kind == Kind::Object {
            self.keys.remove(index);
        }
        self.children.remove(index);
    }

    /// Relocate the entry named `key` to `new_index`, preserving the
    /// relative order of all other entries. Warns and no-ops on a missing
    /// key or an out-of-bounds target.
    pub fn move_field(&mut self, key: &str, new_index: usize) {
        match self.key_index(key) {
            Some(old) => self.move_at(old, new_index),
            None => warn!("move_field: no field named \"{key}\"; ignoring"),
        }
    }

    /// Relocate the entry at `old_index` to `new_index`, preserving the
    /// relative order of all other entries. Length never changes. No-op when
    /// the indices are equal; warns and no-ops on a scalar receiver or an
    /// out-of-bounds index.
    pub fn move_at(&mut self, old_index: usize, new_index: usize) {
        if self.kind != Kind::Object && self.kind != Kind::Array {
            warn!("move_at on a {} node; ignoring", self.kind);
            return;
        }
        let len = self.children.len();
        if old_index >= len || new_index >= len {
            warn!("move_at: {old_index} -> {new_index} out of bounds for length {len}; ignoring");
            return;
        }
        if old_index == new_index {
            return;
        }
        // Remove-then-insert lands the entry at new_index for both
        // directions: moving down, the insertion point is unaffected by the
        // removal; moving up, the removal shifts the target left by one,
        // which the insertion position already accounts for.
        let child = self.children.remove(old_index);
        self.children.insert(new_index, child);
        if self.kind == Kind::Object {
            let key = self.keys.remove(old_index);
            self.keys.insert(new_index, key);
        }
    }

    /// Replace the key string at the position of `old_key`, keeping the
    /// entry and its value where they are. No collision check against
    /// existing keys. Warns and no-ops on a missing key.
    pub fn rename_field(&mut self, old_key: &str, new_key: impl Into<String>) {
        match self.key_index(old_key) {
            Some(i) => self.keys[i] = new_key.into(),
            None => warn!("rename_field: no field named \"{old_key}\"; ignoring"),
        }
    }

    /// Replace the key string at `index` in place. Warns and no-ops on a
    /// non-Object receiver or an out-of-range index.
    pub fn rename_at(&mut self, index: usize, new_key: impl Into<String>) {
        if self.kind != Kind::Object {
            warn!("rename_at({index}) on a {} node; ignoring", self.kind);
            return;
        }
        if index >= self.keys.len() {
            warn!(
                "rename_at: index {index} out of bounds for length {}; ignoring",
                self.keys.len()
            );
            return;
        }
        self.keys[index] = new_key.into();
    }

    /// Convert this node to an Object, synthesizing a key for the previous
    /// payload per the [`Value::add_field`] rules.
    fn promote_to_object(&mut self) {
        match self.kind {
            Kind::Object => {}
            Kind::Null => {
                self.kind = Kind::Object;
            }
            Kind::Array => {
                self.keys = (0..self.children.len()).map(|i| i.to_string()).collect();
                self.kind = Kind::Object;
            }
            Kind::String | Kind::Number | Kind::Bool => {
                let key = match self.kind {
                    Kind::String => "string",
                    Kind::Number => "number",
                    _ => "bool",
                };
                let prior = std::mem::take(self);
                self.kind = Kind::Object;
                self.keys.push(key.to_string());
                self.children.push(prior);
            }
        }
    }

    // ------------------------------------------------------------------
    // Typed field getters, vivifying family
    // ------------------------------------------------------------------
    //
    // Absent fields are created with the type's zero value before being
    // read. A present field of the wrong kind warns but is still read
    // through the loose accessor (which yields that type's backing field).

    fn typed_field(&mut self, key: &str, kind: Kind) -> &mut Value {
        if self.key_index(key).is_none() {
            self.add_field(key, Value::with_kind(kind));
        }
        let entry = self.get_or_create(key);
        if entry.kind != kind {
            warn!("field \"{key}\" is a {} node, expected {kind}", entry.kind);
        }
        entry
    }

    /// The string value of `key`, vivifying an empty String entry if absent.
    pub fn string_field(&mut self, key: &str) -> String {
        self.typed_field(key, Kind::String).str_value().to_string()
    }

    /// The `i32` value of `key`, vivifying a zero Number entry if absent.
    pub fn int_field(&mut self, key: &str) -> i32 {
        self.long_field(key) as i32
    }

    /// The `i64` value of `key`, vivifying a zero Number entry if absent.
    pub fn long_field(&mut self, key: &str) -> i64 {
        if self.key_index(key).is_none() {
            self.add_field(key, Value::from(0i64));
        }
        let entry = self.typed_field(key, Kind::Number);
        entry.long_value()
    }

    /// The `f32` value of `key`, vivifying a zero Number entry if absent.
    pub fn float_field(&mut self, key: &str) -> f32 {
        self.double_field(key) as f32
    }

    /// The `f64` value of `key`, vivifying a zero Number entry if absent.
    pub fn double_field(&mut self, key: &str) -> f64 {
        if self.key_index(key).is_none() {
            self.add_field(key, Value::from(0.0f64));
        }
        let entry = self.typed_field(key, Kind::Number);
        entry.double_value()
    }

    /// The bool value of `key`, vivifying a false Bool entry if absent.
    pub fn bool_field(&mut self, key: &str) -> bool {
        self.typed_field(key, Kind::Bool).bool_value()
    }

    /// The Object entry at `key`, vivifying an empty Object if absent.
    /// A present entry of the wrong kind warns but is returned as-is.
    pub fn object_field(&mut self, key: &str) -> &mut Value {
        self.typed_field(key, Kind::Object)
    }

    /// The Array entry at `key`, vivifying an empty Array if absent.
    /// A present entry of the wrong kind warns but is returned as-is.
    pub fn array_field(&mut self, key: &str) -> &mut Value {
        self.typed_field(key, Kind::Array)
    }

    // ------------------------------------------------------------------
    // Typed field getters, safe family
    // ------------------------------------------------------------------
    //
    // Never mutate. An absent field or a wrong-kind field warns and yields
    // the type default; the tree is untouched either way.

    fn safe_field(&self, key: &str, kind: Kind) -> Option<&Value> {
        match self.try_get(key) {
            Some(entry) if entry.kind == kind => Some(entry),
            Some(entry) => {
                warn!("field \"{key}\" is a {} node, expected {kind}", entry.kind);
                None
            }
            None => {
                warn!("no field named \"{key}\"");
                None
            }
        }
    }

    /// The string value of `key`, or `""` with a warning when the field is
    /// absent or not a String. Never mutates.
    pub fn string_field_safe(&self, key: &str) -> String {
        self.safe_field(key, Kind::String)
            .map(|v| v.str_value().to_string())
            .unwrap_or_default()
    }

    /// The `i32` value of `key`, or `0` with a warning. Never mutates.
    pub fn int_field_safe(&self, key: &str) -> i32 {
        self.long_field_safe(key) as i32
    }

    /// The `i64` value of `key`, or `0` with a warning. Never mutates.
    pub fn long_field_safe(&self, key: &str) -> i64 {
        self.safe_field(key, Kind::Number)
            .map(|v| v.long_value())
            .unwrap_or_default()
    }

    /// The `f32` value of `key`, or `0.0` with a warning. Never mutates.
    pub fn float_field_safe(&self, key: &str) -> f32 {
        self.double_field_safe(key) as f32
    }

    /// The `f64` value of `key`, or `0.0` with a warning. Never mutates.
    pub fn double_field_safe(&self, key: &str) -> f64 {
        self.safe_field(key, Kind::Number)
            .map(|v| v.double_value())
            .unwrap_or_default()
    }

    /// The bool value of `key`, or `false` with a warning. Never mutates.
    pub fn bool_field_safe(&self, key: &str) -> bool {
        self.safe_field(key, Kind::Bool)
            .map(|v| v.bool_value())
            .unwrap_or_default()
    }
}
