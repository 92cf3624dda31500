//! Property-based round-trip tests.
//!
//! Generates random trees from the typed-literal constructors and verifies
//! `parse(stringify(x)) == x` plus stringify idempotence. String payloads
//! are restricted to text with no quotes, backslashes, or raw control
//! characters — the documented round-trip caveat: the core stores payloads
//! verbatim and performs no escaping, so a payload holding a raw `"` cannot
//! survive a round trip by design.

use jot_core::{parse, parse_with_depth, stringify, stringify_pretty, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Object keys: unquoted-identifier shaped, never empty.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

/// String payloads that survive verbatim storage: no `"`, `\`, or control
/// characters. Delimiters are fine — the scanner ignores them inside quotes.
fn arb_payload() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 _.,:;{}\\[\\]-]{0,24}").unwrap(),
        Just(String::new()),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("42".to_string()),
        Just("caf\u{00e9} \u{4f60}\u{597d}".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::null()),
        any::<bool>().prop_map(Value::from),
        (-1_000_000_000i64..1_000_000_000i64).prop_map(Value::from),
        arb_float().prop_map(Value::from),
        arb_payload().prop_map(Value::from),
    ]
}

/// Floats as mantissa / 10^n so the decimal display round-trips exactly.
fn arb_float() -> impl Strategy<Value = f64> {
    (-100_000_000i64..100_000_000i64, 0u32..5u32)
        .prop_map(|(mantissa, decimals)| mantissa as f64 / 10f64.powi(decimals as i32))
}

fn arb_tree() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 24, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|children| {
                let mut v = Value::array();
                for child in children {
                    v.push(child);
                }
                v
            }),
            prop::collection::vec((arb_key(), inner), 0..5).prop_map(|fields| {
                let mut v = Value::object();
                for (key, child) in fields {
                    v.add_field(key, child);
                }
                v
            }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn parse_stringify_round_trips(tree in arb_tree()) {
        let text = stringify(&tree);
        prop_assert_eq!(parse(&text), tree);
    }

    #[test]
    fn stringify_is_idempotent(tree in arb_tree()) {
        let once = stringify(&tree);
        let twice = stringify(&parse(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pretty_and_compact_agree_logically(tree in arb_tree()) {
        prop_assert_eq!(parse(&stringify_pretty(&tree)), parse(&stringify(&tree)));
    }

    #[test]
    fn depth_zero_parse_keeps_tag_and_no_children(tree in arb_tree()) {
        let text = stringify(&tree);
        let truncated = parse_with_depth(&text, Some(0));
        prop_assert_eq!(truncated.kind(), tree.kind());
        prop_assert_eq!(truncated.len(), 0);
    }

    #[test]
    fn clone_with_depth_none_equals_source(tree in arb_tree()) {
        prop_assert_eq!(tree.clone_with_depth(None), tree);
    }

    #[test]
    fn move_at_preserves_length(tree in arb_tree(), from in 0usize..8, to in 0usize..8) {
        let mut tree = tree;
        let before = tree.len();
        tree.move_at(from, to);
        prop_assert_eq!(tree.len(), before);
    }
}
