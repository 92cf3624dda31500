use jot_core::{parse, EntryCursor, JotError, Kind, Value};

// ============================================================================
// EntryCursor: the legacy enumerator protocol
// ============================================================================

#[test]
fn cursor_walks_children_in_order() {
    let v = parse("[10,20,30]");
    let mut cursor = EntryCursor::new(&v).unwrap();
    let mut seen = Vec::new();
    while cursor.move_next() {
        seen.push(cursor.current().unwrap().long_value());
    }
    assert_eq!(seen, [10, 20, 30]);
}

#[test]
fn cursor_starts_before_first_child() {
    let v = parse("[1]");
    let cursor = EntryCursor::new(&v).unwrap();
    assert!(cursor.current().is_none());
}

#[test]
fn cursor_move_next_false_at_end() {
    let v = parse("[1]");
    let mut cursor = EntryCursor::new(&v).unwrap();
    assert!(cursor.move_next());
    assert!(!cursor.move_next());
    assert!(cursor.current().is_none());
}

#[test]
fn cursor_over_empty_container() {
    let v = Value::array();
    let mut cursor = EntryCursor::new(&v).unwrap();
    assert!(!cursor.move_next());
}

#[test]
fn cursor_over_scalar_is_error() {
    let v = Value::from(5);
    match EntryCursor::new(&v) {
        Err(JotError::NotAContainer { kind }) => assert_eq!(kind, Kind::Number),
        other => panic!("expected NotAContainer, got {other:?}"),
    }
}

#[test]
fn reset_lands_on_first_child_not_before_it() {
    // Preserved asymmetry: the constructor starts at −1, reset() at 0.
    let v = parse("[10,20]");
    let mut cursor = EntryCursor::new(&v).unwrap();
    while cursor.move_next() {}
    cursor.reset();
    // After reset the cursor already stands on the first child...
    assert_eq!(cursor.current().map(Value::long_value), Some(10));
    // ...so the next move_next skips to the second.
    assert!(cursor.move_next());
    assert_eq!(cursor.current().map(Value::long_value), Some(20));
}

#[test]
fn object_cursor_yields_values_keys_by_position() {
    let v = parse(r#"{"a":1,"b":2}"#);
    let mut cursor = EntryCursor::new(&v).unwrap();
    let mut pairs = Vec::new();
    let mut i = 0;
    while cursor.move_next() {
        pairs.push((
            v.key_at(i).unwrap().to_string(),
            cursor.current().unwrap().long_value(),
        ));
        i += 1;
    }
    assert_eq!(pairs, [("a".to_string(), 1), ("b".to_string(), 2)]);
}

// ============================================================================
// Conventional iterators
// ============================================================================

#[test]
fn iter_over_array() {
    let v = parse("[1,2,3]");
    let sum: i64 = v.iter().map(Value::long_value).sum();
    assert_eq!(sum, 6);
}

#[test]
fn iter_over_scalar_is_empty() {
    let v = Value::from("x");
    assert_eq!(v.iter().count(), 0);
}

#[test]
fn entries_pairs_keys_with_values() {
    let v = parse(r#"{"a":1,"b":2}"#);
    let entries: Vec<_> = v
        .entries()
        .map(|(k, child)| (k.unwrap().to_string(), child.long_value()))
        .collect();
    assert_eq!(entries, [("a".to_string(), 1), ("b".to_string(), 2)]);
}

#[test]
fn entries_on_array_have_no_keys() {
    let v = parse("[5]");
    let entries: Vec<_> = v.entries().collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].0.is_none());
    assert_eq!(entries[0].1, &Value::from(5));
}

#[test]
fn entries_size_hint_is_exact() {
    let v = parse("[1,2,3,4]");
    let mut entries = v.entries();
    assert_eq!(entries.size_hint(), (4, Some(4)));
    entries.next();
    assert_eq!(entries.size_hint(), (3, Some(3)));
}

#[test]
fn enumeration_order_matches_insertion_order() {
    let mut v = jot_core::Value::object();
    for key in ["first", "second", "third"] {
        v.add_field(key, key);
    }
    v.move_field("third", 0);
    let keys: Vec<_> = v.entries().map(|(k, _)| k.unwrap()).collect();
    assert_eq!(keys, ["third", "first", "second"]);
}
