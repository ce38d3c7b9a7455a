//! # filterql-core
//!
//! A parser for a constrained SQL-like filter grammar, producing a
//! backend-neutral condition structure.
//!
//! This crate provides:
//! - A hand-written recursive descent parser over a byte cursor
//! - Two grammar dialects: standalone WHERE expressions and SELECT clause sets
//! - Typed literals: integers, quoted strings, booleans, calendar dates,
//!   timestamps and list literals
//! - Folding of AND/OR chains into a left-to-right tree or a flat tagged list
//!
//! ## WHERE expressions
//!
//! ```rust
//! use filterql_core::{fold_tree, parse_where, Filter};
//!
//! let chain = parse_where("status = 'open' AND (age > 30 OR NOT (vip = true))").unwrap();
//! assert_eq!(chain.len(), 2);
//!
//! // No AND-over-OR precedence: links combine strictly left to right.
//! let tree = fold_tree(&parse_where("a = 1 AND b = 2 OR c = 3").unwrap()).unwrap();
//! assert!(matches!(tree, Filter::Or(..)));
//! ```
//!
//! ## Clause sets
//!
//! ```rust
//! use filterql_core::parse_clauses;
//!
//! let set = parse_clauses(
//!     "SELECT DISTINCT name, age WHERE NOT age < 18 ORDER BY age DESC LIMIT 10",
//! )
//! .unwrap();
//! assert_eq!(set.fields, vec!["name", "age"]);
//! assert_eq!(set.limit, Some(10));
//! ```
//!
//! ## Literals
//!
//! ```rust
//! use filterql_core::{parse_literal, Literal};
//!
//! assert_eq!(parse_literal("-42").unwrap(), Literal::Integer(-42));
//! assert!(parse_literal("DATE '2023-02-29'").unwrap_err().is_literal_value());
//! ```

pub mod ast;
pub mod dialect;
pub mod fold;
pub mod lexer;
pub mod parser;

pub use ast::{ClauseSet, Condition, ConditionChain, Literal, Operator};
pub use dialect::{Capabilities, ClauseDialect, Dialect, ExpressionDialect, FoldShape};
pub use fold::{flatten, fold_tree, resolve, Filter, Folded, Join, TaggedCondition};
pub use parser::{ParseError, ParseErrorKind, Parser};

/// Parses a standalone WHERE expression in the expression dialect.
///
/// # Errors
///
/// Returns a `ParseError` if the text is not a complete condition chain.
pub fn parse_where(text: &str) -> Result<ConditionChain, ParseError> {
    Parser::new(text, ExpressionDialect).parse_chain()
}

/// Parses a `SELECT ...` clause set in the clause dialect.
///
/// # Errors
///
/// Returns a `ParseError` if the text is not a complete clause set.
pub fn parse_clauses(text: &str) -> Result<ClauseSet, ParseError> {
    Parser::new(text, ClauseDialect).parse_clause_set()
}

/// Parses exactly one literal, including a parenthesized list.
///
/// # Errors
///
/// Returns a `ParseError` if the text is not exactly one literal.
pub fn parse_literal(text: &str) -> Result<Literal, ParseError> {
    Parser::new(text, ExpressionDialect).parse_literal()
}
