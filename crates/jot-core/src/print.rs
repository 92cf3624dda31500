//! Serializer — converts a [`Value`] tree back into JSON text.
//!
//! Emission is a straight recursive dispatch on the node's tag. Two points
//! carry over from the data model and are documented caveats, not defects:
//!
//! - String payloads are emitted **verbatim** between literal quotes. The
//!   core performs no escaping; a payload holding raw control characters or
//!   unescaped quotes will not round-trip. Callers that need escaping do it
//!   before storing the payload (the editor collaborator does exactly that
//!   before writing files).
//! - Numbers follow their authoritative representation: integer formatting
//!   when `is_integer` is set, invariant floating formatting otherwise, so
//!   `5` and `5.0` survive a round trip distinctly.
//!
//! Pretty mode adds one tab per depth level and newlines. It changes
//! whitespace only, never logical content.

use crate::value::{Kind, Value};

/// Serialize compactly: no whitespace between tokens.
pub fn stringify(value: &Value) -> String {
    stringify_with_depth(value, None)
}

/// Serialize compactly, truncating containers `max_depth` levels below the
/// root. At the cutoff a container emits empty brackets.
pub fn stringify_with_depth(value: &Value, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    write_value(value, max_depth, 0, false, &mut out);
    out
}

/// Serialize with per-depth tab indentation and newlines.
pub fn stringify_pretty(value: &Value) -> String {
    stringify_pretty_with_depth(value, None)
}

/// Pretty variant of [`stringify_with_depth`].
pub fn stringify_pretty_with_depth(value: &Value, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    write_value(value, max_depth, 0, true, &mut out);
    out
}

fn write_value(value: &Value, depth: Option<usize>, indent: usize, pretty: bool, out: &mut String) {
    match value.kind() {
        Kind::Null => out.push_str("null"),
        Kind::Bool => out.push_str(if value.bool_value() { "true" } else { "false" }),
        Kind::String => {
            out.push('"');
            out.push_str(value.str_value());
            out.push('"');
        }
        Kind::Number => write_number(value, out),
        Kind::Object | Kind::Array => write_container(value, depth, indent, pretty, out),
    }
}

/// Integer formatting when the integer representation is authoritative,
/// invariant floating formatting otherwise. A whole-valued float keeps a
/// trailing `.0` so it re-parses as a float, not an integer.
fn write_number(value: &Value, out: &mut String) {
    if value.is_integer() {
        out.push_str(&value.long_value().to_string());
        return;
    }
    let f = value.double_value();
    let text = f.to_string();
    out.push_str(&text);
    if f.is_finite() && !text.contains('.') && !text.contains('e') && !text.contains('E') {
        out.push_str(".0");
    }
}

fn write_container(
    value: &Value,
    depth: Option<usize>,
    indent: usize,
    pretty: bool,
    out: &mut String,
) {
    let object = value.kind() == Kind::Object;
    let (open, close) = if object { ('{', '}') } else { ('[', ']') };
    let descend = depth.map_or(true, |d| d > 0);
    let child_depth = depth.map(|d| d.saturating_sub(1));

    out.push(open);
    if !descend || value.is_empty() {
        out.push(close);
        return;
    }

    for (i, child) in value.children().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if pretty {
            out.push('\n');
            push_indent(indent + 1, out);
        }
        if object {
            out.push('"');
            out.push_str(&value.keys()[i]);
            out.push('"');
            out.push(':');
            if pretty {
                out.push(' ');
            }
        }
        write_value(child, child_depth, indent + 1, pretty, out);
    }

    if pretty {
        out.push('\n');
        push_indent(indent, out);
    }
    out.push(close);
}

fn push_indent(indent: usize, out: &mut String) {
    for _ in 0..indent {
        out.push('\t');
    }
}
