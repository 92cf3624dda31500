//! # jot-core
//!
//! A self-contained, lenient JSON document model: a mutable, ordered,
//! type-tagged tree that parses from text, mutates in place through a rich
//! field/index API, serializes back to text, deep-copies with depth limits,
//! and iterates — without a host JSON library underneath.
//!
//! This is *not* a strict JSON implementation, by design. The parser
//! degrades malformed tokens to Null with a warning instead of failing, and
//! string payloads are stored and emitted verbatim — escaping is the
//! caller's responsibility.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::{parse, stringify, Value};
//!
//! let mut doc = parse(r#"{"name":"Alice","scores":[95,87]}"#);
//! assert_eq!(doc.try_get("name").map(Value::str_value), Some("Alice"));
//!
//! doc.set_field("name", "Bob");
//! doc.add_field("active", true);
//! assert_eq!(stringify(&doc), r#"{"name":"Bob","scores":[95,87],"active":true}"#);
//! ```
//!
//! ## Failure policy
//!
//! Two policies coexist and are part of the contract:
//!
//! - **Hard-fail**: bounds-checked positional access and cursor construction
//!   over a scalar return a [`JotError`].
//! - **Soft-warn**: remove/move/rename with a bad key or index, the
//!   `*_field_safe` getters, and malformed tokens during parsing log through
//!   the [`log`] facade and no-op or return a type default. Install any
//!   `log` sink (the `jot` CLI uses `env_logger`) to see the warnings; the
//!   core never installs one itself.
//!
//! ## Concurrency
//!
//! Single-threaded by contract. There is no internal locking; mutating one
//! tree from multiple threads must be serialized externally. `parse` and
//! `stringify` run to completion on the calling thread — asynchronous
//! scheduling, like file I/O, belongs to external collaborators, which can
//! use [`Value::finished`] as the completion marker.
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] node: tags, typed accessors, deep copy
//! - [`parse`](mod@parse) — lenient single-pass text → tree
//! - [`print`] — tree → text, compact or pretty, with depth truncation
//! - [`iter`] — the legacy cursor protocol and a conventional iterator
//! - [`error`] — the two hard-fail error conditions

pub mod error;
mod field;
pub mod iter;
pub mod parse;
pub mod print;
pub mod value;

pub use error::{JotError, Result};
pub use iter::{Entries, EntryCursor};
pub use parse::{parse, parse_with_depth};
pub use print::{stringify, stringify_pretty, stringify_pretty_with_depth, stringify_with_depth};
pub use value::{Kind, Value};
