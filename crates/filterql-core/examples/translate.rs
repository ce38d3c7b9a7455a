//! Parameterized SQL translator
//!
//! Shows how a backend consumes a folded filter: every leaf is matched
//! exhaustively and values are bound as `?` parameters instead of being
//! spliced into the query text.
//!
//! Run with: cargo run --example translate -- "status = 'open' AND (age > 30 OR vip = true)"

use filterql_core::ast::{Condition, Literal};
use filterql_core::{fold_tree, parse_where, Filter};

/// Appends SQL for `filter` to `sql`, pushing bound values to `params`.
fn translate(filter: &Filter, sql: &mut String, params: &mut Vec<Literal>) {
    match filter {
        Filter::Leaf(condition) => translate_leaf(condition, sql, params),
        Filter::Not(inner) => {
            sql.push_str("NOT (");
            translate(inner, sql, params);
            sql.push(')');
        }
        Filter::And(left, right) | Filter::Or(left, right) => {
            let op = if matches!(filter, Filter::And(..)) { "AND" } else { "OR" };
            sql.push('(');
            translate(left, sql, params);
            sql.push_str(&format!(" {op} "));
            translate(right, sql, params);
            sql.push(')');
        }
    }
}

fn translate_leaf(condition: &Condition, sql: &mut String, params: &mut Vec<Literal>) {
    match condition {
        Condition::Comparison {
            field,
            operator,
            value,
        } => {
            sql.push_str(&format!("{field} {operator} ?"));
            params.push(value.clone());
        }
        Condition::NullCheck {
            field,
            expects_null,
        } => {
            let test = if *expects_null { "IS NULL" } else { "IS NOT NULL" };
            sql.push_str(&format!("{field} {test}"));
        }
        Condition::Membership {
            negated, values, ..
        } if values.is_empty() => {
            // `x IN ()` is not valid SQL; an empty set matches nothing.
            sql.push_str(if *negated { "1 = 1" } else { "1 = 0" });
        }
        Condition::Membership {
            field,
            negated,
            values,
        } => {
            let op = if *negated { "NOT IN" } else { "IN" };
            let marks = vec!["?"; values.len()].join(", ");
            sql.push_str(&format!("{field} {op} ({marks})"));
            params.extend(values.iter().cloned());
        }
        Condition::Group { .. } => {
            unreachable!("fold_tree replaces groups with their folded body")
        }
    }
}

fn main() {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "status = 'open' AND (age > 30 OR tag IN ('a', 'b'))".to_string());

    let chain = match parse_where(&text) {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let Some(filter) = fold_tree(&chain) else {
        return;
    };

    let mut sql = String::from("SELECT * FROM items WHERE ");
    let mut params = Vec::new();
    translate(&filter, &mut sql, &mut params);

    println!("{sql}");
    for (i, param) in params.iter().enumerate() {
        println!("  ?{} = {param}", i + 1);
    }
}
