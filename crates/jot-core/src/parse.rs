//! Lenient single-pass parser — converts JSON text into a [`Value`] tree.
//!
//! This is deliberately *not* a validating JSON parser. Malformed tokens
//! degrade locally to Null with a warning; siblings in the same container
//! are unaffected, and the parse as a whole never fails. String payloads are
//! taken **verbatim** between their quotes — no escape decoding happens
//! here, that is a caller responsibility.
//!
//! Containers are delimited by one forward scan tracking three pieces of
//! state at once:
//!
//! - an open-quote toggle, so delimiters inside string literals are inert;
//! - a one-character skip after every backslash, so an escaped quote does
//!   not toggle the quote state;
//! - a signed nesting depth, incremented on `{`/`[` and decremented on
//!   `}`/`]`.
//!
//! Only at depth 0 do commas mark sibling boundaries and (for objects) does
//! a colon split key from value. Each collected substring is then parsed
//! recursively with a decremented depth budget.
//!
//! # Key design decisions
//!
//! - **Byte scanning is UTF-8 safe here**: every delimiter the scanner
//!   reacts to is ASCII, and token boundaries are only ever set at those
//!   ASCII positions, so slicing stays on char boundaries. Non-ASCII bytes
//!   fall through the match untouched.
//! - **Depth budget as `Option<usize>`**: `None` is unbounded, `Some(0)`
//!   builds the node's own tag but instantiates no children. The recursion
//!   simply stops adding children once the budget reaches zero, which is
//!   what the original's `-1` sentinel expressed.

use crate::value::{Kind, Value};
use log::warn;

/// Whitespace stripped from both ends of every token: space, CR, LF, TAB,
/// BOM, unit separator.
const TOKEN_TRIM: &[char] = &[' ', '\r', '\n', '\t', '\u{FEFF}', '\u{001F}'];

/// Parse `text` into a [`Value`] with no depth limit.
///
/// Never fails: malformed tokens degrade to Null with a warning.
pub fn parse(text: &str) -> Value {
    parse_with_depth(text, None)
}

/// Parse `text` into a [`Value`], truncating the tree `max_depth` levels
/// below the root.
///
/// `None` is unbounded. `Some(0)` produces a node with the correct
/// top-level tag and zero children. The returned root is always finished —
/// this call runs to completion on the calling thread (an asynchronous
/// wrapper is an external collaborator's concern).
pub fn parse_with_depth(text: &str, max_depth: Option<usize>) -> Value {
    parse_token(text, max_depth)
}

fn parse_token(text: &str, depth: Option<usize>) -> Value {
    let token = text.trim_matches(TOKEN_TRIM);
    if token.is_empty() {
        return Value::null();
    }

    match token.as_bytes()[0] {
        b'"' => parse_string(token),
        b'{' | b'[' => parse_container(token, depth),
        _ => {
            if token.eq_ignore_ascii_case("true") {
                Value::from(true)
            } else if token.eq_ignore_ascii_case("false") {
                Value::from(false)
            } else if token.eq_ignore_ascii_case("null") {
                Value::null()
            } else {
                parse_number(token)
            }
        }
    }
}

/// The payload is the substring between the first and last quote, verbatim.
/// A lone quote yields an empty string.
fn parse_string(token: &str) -> Value {
    let last = token.rfind('"').unwrap_or(0);
    if last == 0 {
        return Value::from("");
    }
    Value::from(&token[1..last])
}

/// Culture-invariant numeric parse. A token without `.` goes to the integer
/// payload; one with `.` goes to the floating payload. Failure degrades to
/// Null with a warning rather than an error.
fn parse_number(token: &str) -> Value {
    if token.contains('.') {
        match token.parse::<f64>() {
            Ok(f) => Value::from(f),
            Err(_) => {
                warn!("malformed token \"{token}\" degraded to null");
                Value::null()
            }
        }
    } else {
        match token.parse::<i64>() {
            Ok(i) => Value::from(i),
            Err(_) => {
                warn!("malformed token \"{token}\" degraded to null");
                Value::null()
            }
        }
    }
}

/// Scan a `{...}` or `[...]` token, splitting out top-level child substrings
/// and recursing into each with a decremented depth budget.
fn parse_container(token: &str, depth: Option<usize>) -> Value {
    let bytes = token.as_bytes();
    let object = bytes[0] == b'{';
    let mut node = if object { Value::object() } else { Value::array() };
    let build_children = depth.map_or(true, |d| d > 0);
    let child_depth = depth.map(|d| d.saturating_sub(1));

    let mut in_quotes = false;
    let mut nesting: i64 = 0;
    let mut token_start = 1usize;
    let mut pending_key: Option<String> = None;

    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                // The next character is escaped; in particular an escaped
                // quote must not toggle the quote state.
                i += 2;
                continue;
            }
            b'"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            b'{' | b'[' => nesting += 1,
            b'}' | b']' => {
                if nesting == 0 {
                    // Closing bracket of this container.
                    flush_child(
                        &mut node,
                        &token[token_start..i],
                        &mut pending_key,
                        build_children,
                        child_depth,
                    );
                    break;
                }
                nesting -= 1;
            }
            b':' if nesting == 0 && object => {
                pending_key = Some(extract_key(&token[token_start..i]));
                token_start = i + 1;
            }
            b',' if nesting == 0 => {
                flush_child(
                    &mut node,
                    &token[token_start..i],
                    &mut pending_key,
                    build_children,
                    child_depth,
                );
                token_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    node
}

/// Recursively parse a collected child substring and attach it. Zero-length
/// tokens between delimiters are silently treated as absent, which is what
/// makes a trailing comma tolerable rather than an error.
fn flush_child(
    node: &mut Value,
    raw: &str,
    pending_key: &mut Option<String>,
    build_children: bool,
    child_depth: Option<usize>,
) {
    let key = pending_key.take();
    let raw = raw.trim_matches(TOKEN_TRIM);
    if raw.is_empty() || !build_children {
        return;
    }
    let child = parse_token(raw, child_depth);
    if node.kind() == Kind::Object {
        node.add_field(key.unwrap_or_default(), child);
    } else {
        // Attach directly; add_field would retag the array as an object.
        node.children.push(child);
    }
}

/// An object key is the first top-level quoted token before the colon. An
/// unquoted key is malformed JSON but accepted as-is (lenient policy).
fn extract_key(raw: &str) -> String {
    let raw = raw.trim_matches(TOKEN_TRIM);
    if let (Some(first), Some(last)) = (raw.find('"'), raw.rfind('"')) {
        if first < last {
            return raw[first + 1..last].to_string();
        }
    }
    raw.to_string()
}
