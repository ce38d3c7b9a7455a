//! Condition grammar: leaves, groups and conjunction chains.
//!
//! ```text
//! chain      := condition (ws conjunction ws condition)*
//! condition  := ['NOT' ws] (group | leaf)
//! group      := '(' ws chain ws ')'
//! leaf       := null_check | membership | comparison
//! null_check := identifier ws ('IS NOT NULL' | 'IS NULL')
//! membership := identifier ws ('NOT IN' | 'IN') ws list_literal
//! comparison := identifier ws operator ws literal
//! ```
//!
//! Which of `NOT leaf`, `NOT group` and `group` exist is decided by the
//! dialect.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::parser::Parser;
use crate::ast::{Condition, ConditionChain, Conjunction, Operator};
use crate::dialect::Dialect;
use crate::lexer::Keyword;

impl<D: Dialect> Parser<'_, D> {
    /// Parses a chain of conditions joined by AND/OR.
    ///
    /// Links are kept in input order; no precedence is applied here.
    pub(super) fn chain(&mut self) -> Result<ConditionChain, ParseError> {
        let mut chain = ConditionChain::new();
        let (negated, condition) = self.condition()?;
        chain.push(Conjunction::And, negated, condition);

        loop {
            let conjunction = if self.cursor.eat_spaced_keyword(Keyword::And) {
                Conjunction::And
            } else if self.cursor.eat_spaced_keyword(Keyword::Or) {
                Conjunction::Or
            } else {
                break;
            };
            self.cursor.skip_whitespace();
            let (negated, condition) = self.condition()?;
            chain.push(conjunction, negated, condition);
        }

        Ok(chain)
    }

    /// Parses one condition with an optional `NOT` prefix.
    ///
    /// Returns whether the prefix applies to the link (leaf negation). A
    /// negated group records the prefix on the group itself.
    fn condition(&mut self) -> Result<(bool, Condition), ParseError> {
        let start = self.cursor.pos();
        let may_negate =
            self.dialect.allows_leaf_negation() || self.dialect.allows_group_negation();

        if may_negate && self.cursor.eat_keyword(Keyword::Not) {
            self.cursor.skip_whitespace();
            if self.cursor.peek() == Some('(') {
                if self.dialect.allows_group_negation() {
                    return Ok((false, self.group(true)?));
                }
                return Err(self.dialect_error(
                    "NOT cannot be applied to a parenthesized group",
                    start,
                ));
            }
            if !self.dialect.allows_leaf_negation() {
                // Without leaf negation a `NOT` before a leaf can only be
                // the field name itself.
                let err = self.dialect_error(
                    "NOT may only be applied to a parenthesized group",
                    start,
                );
                self.cursor.reset(start);
                return self.leaf().map(|leaf| (false, leaf)).map_err(|_| err);
            }
            return Ok((true, self.leaf()?));
        }

        if self.cursor.peek() == Some('(') {
            if self.dialect.allows_grouping() {
                return Ok((false, self.group(false)?));
            }
            return Err(self.dialect_error("Parenthesized groups are not supported", start));
        }

        Ok((false, self.leaf()?))
    }

    fn dialect_error(&self, message: &str, start: usize) -> ParseError {
        self.cursor.error(
            ParseErrorKind::Syntax,
            format!("{message} in the {} dialect", self.dialect.name()),
            start,
        )
    }

    /// Parses `( chain )`. The body is folded in isolation later.
    fn group(&mut self, negated: bool) -> Result<Condition, ParseError> {
        self.enter_group()?;
        self.cursor.expect("(")?;
        self.cursor.skip_whitespace();
        let body = self.chain()?;
        self.cursor.skip_whitespace();
        if !self.cursor.eat(")") {
            return Err(self.cursor.unexpected("')' to close group"));
        }
        self.leave_group();
        trace!(links = body.len(), negated, "parsed group");
        Ok(Condition::Group { body, negated })
    }

    /// Parses a leaf: null check, membership or comparison.
    ///
    /// Longer keywords are tried before their prefixes: `IS NOT NULL`
    /// before `IS NULL`, `NOT IN` before `IN`, `NOT LIKE` before `LIKE`.
    fn leaf(&mut self) -> Result<Condition, ParseError> {
        let field = self.cursor.scan_identifier()?;

        if self.cursor.eat_spaced_keyword(Keyword::IsNotNull) {
            return Ok(Condition::NullCheck {
                field,
                expects_null: false,
            });
        }
        if self.cursor.eat_spaced_keyword(Keyword::IsNull) {
            return Ok(Condition::NullCheck {
                field,
                expects_null: true,
            });
        }

        for (keyword, negated) in [(Keyword::NotIn, true), (Keyword::In, false)] {
            if self.cursor.eat_spaced_keyword(keyword) {
                self.cursor.skip_whitespace();
                let values = self.list_literal()?;
                return Ok(Condition::Membership {
                    field,
                    negated,
                    values,
                });
            }
        }

        let operator = self.comparison_operator()?;
        self.cursor.skip_whitespace();
        let value = self.literal()?;
        Ok(Condition::Comparison {
            field,
            operator,
            value,
        })
    }

    fn comparison_operator(&mut self) -> Result<Operator, ParseError> {
        for (keyword, operator) in [
            (Keyword::NotLike, Operator::NotLike),
            (Keyword::Like, Operator::Like),
        ] {
            if self.cursor.eat_spaced_keyword(keyword) {
                return Ok(operator);
            }
        }

        let start = self.cursor.pos();
        self.cursor.skip_whitespace();
        for (symbol, operator) in Operator::SYMBOLS {
            if self.cursor.eat(symbol) {
                return Ok(operator);
            }
        }

        let err = self
            .cursor
            .unexpected("comparison operator, IS [NOT] NULL or [NOT] IN");
        self.cursor.reset(start);
        Err(err)
    }
}
