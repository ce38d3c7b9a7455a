//! Parsing and rendering of one input text.

use clap::ValueEnum;
use filterql_core::ast::ConditionChain;
use filterql_core::{flatten, fold_tree, ClauseDialect, ExpressionDialect, Parser};
use tracing::debug;

use crate::error::CliError;

/// Surface grammar to parse the input with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectChoice {
    /// A standalone WHERE expression with parenthesized groups.
    Expression,
    /// A `SELECT ...` clause set with per-leaf NOT.
    Clause,
}

/// How to print the parsed structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The parsed structure as pretty-printed JSON.
    Json,
    /// The condition chain folded left to right into a tree.
    Tree,
    /// One tagged condition per line.
    Flat,
    /// Canonical text that parses back to the same structure.
    Text,
}

/// Parses `text` in `dialect` and renders it in `format`.
pub fn render(
    text: &str,
    dialect: DialectChoice,
    format: OutputFormat,
    max_depth: usize,
) -> Result<String, CliError> {
    debug!(?dialect, ?format, bytes = text.len(), "rendering input");
    match dialect {
        DialectChoice::Expression => {
            let chain = Parser::new(text, ExpressionDialect)
                .with_max_depth(max_depth)
                .parse_chain()?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&chain)?),
                OutputFormat::Text => Ok(chain.to_string()),
                OutputFormat::Tree | OutputFormat::Flat => Ok(render_fold(&chain, format)),
            }
        }
        DialectChoice::Clause => {
            let set = Parser::new(text, ClauseDialect)
                .with_max_depth(max_depth)
                .parse_clause_set()?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&set)?),
                OutputFormat::Text => Ok(set.to_string()),
                OutputFormat::Tree | OutputFormat::Flat => {
                    let chain = set.where_clause.as_ref().ok_or(CliError::NoWhereClause)?;
                    Ok(render_fold(chain, format))
                }
            }
        }
    }
}

fn render_fold(chain: &ConditionChain, format: OutputFormat) -> String {
    if format == OutputFormat::Tree {
        return fold_tree(chain).map(|tree| tree.to_string()).unwrap_or_default();
    }
    flatten(chain)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use filterql_core::parser::DEFAULT_MAX_DEPTH;

    fn run(text: &str, dialect: DialectChoice, format: OutputFormat) -> Result<String, CliError> {
        render(text, dialect, format, DEFAULT_MAX_DEPTH)
    }

    #[test]
    fn test_expression_tree() {
        let out = run(
            "a = 1 AND b = 2 OR c = 3",
            DialectChoice::Expression,
            OutputFormat::Tree,
        )
        .unwrap();
        assert_eq!(out, "((a = 1 AND b = 2) OR c = 3)");
    }

    #[test]
    fn test_expression_text_normalizes_whitespace() {
        let out = run(
            "  a>=1   AND  b IN(1,2)",
            DialectChoice::Expression,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "a >= 1 AND b IN (1, 2)");
    }

    #[test]
    fn test_clause_flat() {
        let out = run(
            "SELECT a WHERE a = 1 OR NOT b IS NULL",
            DialectChoice::Clause,
            OutputFormat::Flat,
        )
        .unwrap();
        assert_eq!(out, "WHERE a = 1\nOR NOT b IS NULL");
    }

    #[test]
    fn test_clause_json() {
        let out = run("SELECT a LIMIT 2", DialectChoice::Clause, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["limit"], serde_json::json!(2));
    }

    #[test]
    fn test_clause_without_where_cannot_fold() {
        let err = run("SELECT a", DialectChoice::Clause, OutputFormat::Tree).unwrap_err();
        assert!(matches!(err, CliError::NoWhereClause));
    }

    #[test]
    fn test_parse_failure() {
        let err = run("a = 1 extra", DialectChoice::Expression, OutputFormat::Json).unwrap_err();
        let CliError::Parse(parse) = err else {
            panic!("Expected parse error");
        };
        assert!(parse.is_trailing_input());
    }

    #[test]
    fn test_max_depth_is_applied() {
        let err = render("((a = 1))", DialectChoice::Expression, OutputFormat::Text, 1)
            .unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }
}
