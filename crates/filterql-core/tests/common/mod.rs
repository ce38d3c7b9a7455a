#![allow(dead_code)]

use filterql_core::ast::{ClauseSet, Condition, ConditionChain, Literal};
use filterql_core::{ClauseDialect, ParseError, Parser};

pub fn parse_where(text: &str) -> ConditionChain {
    filterql_core::parse_where(text)
        .unwrap_or_else(|e| panic!("Failed to parse: {text}\nError: {e:?}"))
}

pub fn parse_where_err(text: &str) -> ParseError {
    filterql_core::parse_where(text).expect_err(&format!("Expected parse error for: {text}"))
}

/// Parses a WHERE chain in the clause dialect (per-leaf NOT, no groups).
pub fn parse_clause_where(text: &str) -> ConditionChain {
    Parser::new(text, ClauseDialect)
        .parse_chain()
        .unwrap_or_else(|e| panic!("Failed to parse: {text}\nError: {e:?}"))
}

pub fn parse_clauses(text: &str) -> ClauseSet {
    filterql_core::parse_clauses(text)
        .unwrap_or_else(|e| panic!("Failed to parse: {text}\nError: {e:?}"))
}

pub fn parse_clauses_err(text: &str) -> ParseError {
    filterql_core::parse_clauses(text).expect_err(&format!("Expected parse error for: {text}"))
}

pub fn parse_literal(text: &str) -> Literal {
    filterql_core::parse_literal(text)
        .unwrap_or_else(|e| panic!("Failed to parse: {text}\nError: {e:?}"))
}

pub fn parse_literal_err(text: &str) -> ParseError {
    filterql_core::parse_literal(text).expect_err(&format!("Expected parse error for: {text}"))
}

/// Returns the single condition of a one-link chain.
pub fn single(text: &str) -> Condition {
    let chain = parse_where(text);
    assert_eq!(chain.len(), 1, "Expected one condition in: {text}");
    chain.links()[0].condition.clone()
}

/// Verifies that `to_string()` renders text that parses back to the same
/// chain, and that rendering is a fixed point.
pub fn round_trip(text: &str) {
    let chain1 = parse_where(text);
    let rendered1 = chain1.to_string();
    let chain2 = parse_where(&rendered1);
    let rendered2 = chain2.to_string();
    assert_eq!(chain1, chain2, "Round-trip changed structure for: {text}");
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {text}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Same as [`round_trip`] for clause sets.
pub fn round_trip_clauses(text: &str) {
    let set1 = parse_clauses(text);
    let rendered1 = set1.to_string();
    let set2 = parse_clauses(&rendered1);
    assert_eq!(set1, set2, "Round-trip changed structure for: {text}");
    assert_eq!(rendered1, set2.to_string());
}
