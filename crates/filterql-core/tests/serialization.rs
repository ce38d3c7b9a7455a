//! Tests for the JSON form handed to translators in other processes.

mod common;
use common::*;

use filterql_core::ast::{ClauseSet, ConditionChain, Literal};
use filterql_core::{fold_tree, resolve, ClauseDialect, Filter, Folded};
use serde_json::json;

#[test]
fn literal_json_shape() {
    assert_eq!(
        serde_json::to_value(parse_literal("42")).unwrap(),
        json!({"type": "integer", "value": 42})
    );
    assert_eq!(
        serde_json::to_value(parse_literal("DATE '2024-02-29'")).unwrap(),
        json!({"type": "date", "value": "2024-02-29"})
    );
    assert_eq!(
        serde_json::to_value(parse_literal("(1, 'a')")).unwrap(),
        json!({"type": "list", "value": [
            {"type": "integer", "value": 1},
            {"type": "text", "value": "a"}
        ]})
    );
}

#[test]
fn timestamp_json_checks_precision() {
    let lit = parse_literal("TIMESTAMP '2024-01-01 00:00:00.25'");
    let value = serde_json::to_value(&lit).unwrap();
    assert_eq!(
        value,
        json!({"type": "timestamp", "value": {"datetime": "2024-01-01T00:00:00.250", "precision": 2}})
    );
    let back: Literal = serde_json::from_value(value).unwrap();
    assert_eq!(back.to_string(), "TIMESTAMP '2024-01-01 00:00:00.25'");

    let rejected = [
        r#"{"type":"timestamp","value":{"datetime":"2024-01-01T00:00:00","precision":9}}"#,
        r#"{"type":"timestamp","value":{"datetime":"2024-01-01T00:00:00.5","precision":0}}"#,
    ];
    for json in rejected {
        let err = serde_json::from_str::<Literal>(json).unwrap_err();
        assert!(err.to_string().contains("precision"), "{json}: {err}");
    }
}

#[test]
fn condition_json_shape() {
    let chain = parse_where("status IS NULL");
    assert_eq!(
        serde_json::to_value(&chain).unwrap(),
        json!([{
            "conjunction": null,
            "negated": false,
            "condition": {"kind": "null_check", "field": "status", "expects_null": true}
        }])
    );
}

#[test]
fn chain_json_round_trip() {
    let chain = parse_where(
        "(a = 1 OR b IN ('x')) AND NOT (t >= TIMESTAMP '2024-01-01 10:00:00.5') OR c = false",
    );
    let json = serde_json::to_string(&chain).unwrap();
    let back: ConditionChain = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chain);
}

#[test]
fn clause_set_json_round_trip() {
    let set = parse_clauses("SELECT DISTINCT a WHERE NOT a = 1 ORDER BY a ASC LIMIT 3");
    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(value["distinct"], json!(true));
    assert_eq!(value["order_by"], json!({"field": "a", "direction": "asc"}));
    assert_eq!(value["offset"], json!(null));
    let back: ClauseSet = serde_json::from_value(value).unwrap();
    assert_eq!(back, set);
}

#[test]
fn folded_json_shape() {
    let tree = fold_tree(&parse_where("a = 1 OR b = 2")).unwrap();
    let value = serde_json::to_value(&tree).unwrap();
    assert!(value["or"].is_array());
    let back: Filter = serde_json::from_value(value).unwrap();
    assert_eq!(back, tree);

    let flat = resolve(&parse_clause_where("a = 1 AND NOT b = 2"), &ClauseDialect).unwrap();
    let value = serde_json::to_value(&flat).unwrap();
    assert_eq!(value["shape"], json!("flat"));
    assert_eq!(value["value"][0]["join"], json!("where"));
    assert_eq!(value["value"][1]["negated"], json!(true));
    let back: Folded = serde_json::from_value(value).unwrap();
    assert_eq!(back, flat);
}

#[test]
fn literal_text_json() {
    assert_eq!(
        serde_json::to_value(Literal::text("it")).unwrap(),
        json!({"type": "text", "value": "it"})
    );
}
