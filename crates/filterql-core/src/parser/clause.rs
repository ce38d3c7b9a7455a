//! SELECT clause-set parsing.
//!
//! Clauses appear in a fixed order, each at most once:
//!
//! ```text
//! SELECT [DISTINCT] fields [WHERE chain] [GROUP BY fields]
//!     [ORDER BY field ASC|DESC] [OFFSET n] [LIMIT n]
//! ```
//!
//! A clause keyword met after its slot has passed is a syntax error; any
//! other leftover text is trailing input.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::parser::Parser;
use crate::ast::{ClauseSet, OrderBy, OrderDirection};
use crate::dialect::Dialect;
use crate::lexer::Keyword;

const CLAUSE_KEYWORDS: [Keyword; 7] = [
    Keyword::Select,
    Keyword::Distinct,
    Keyword::Where,
    Keyword::GroupBy,
    Keyword::OrderBy,
    Keyword::Offset,
    Keyword::Limit,
];

impl<D: Dialect> Parser<'_, D> {
    pub(super) fn clause_set(&mut self) -> Result<ClauseSet, ParseError> {
        self.cursor.expect_keyword(Keyword::Select)?;
        self.cursor.expect_whitespace()?;

        let distinct = self.cursor.eat_keyword(Keyword::Distinct);
        if distinct {
            self.cursor.expect_whitespace()?;
        }
        let fields = self.field_list()?;
        trace!(fields = fields.len(), distinct, "parsed SELECT");

        let mut set = ClauseSet {
            fields,
            distinct,
            ..ClauseSet::default()
        };

        if self.cursor.eat_spaced_keyword(Keyword::Where) {
            self.cursor.expect_whitespace()?;
            let chain = self.chain()?;
            trace!(links = chain.len(), "parsed WHERE");
            set.where_clause = Some(chain);
        }

        if self.cursor.eat_spaced_keyword(Keyword::GroupBy) {
            self.cursor.expect_whitespace()?;
            set.group_by = self.field_list()?;
            trace!(fields = set.group_by.len(), "parsed GROUP BY");
        }

        if self.cursor.eat_spaced_keyword(Keyword::OrderBy) {
            self.cursor.expect_whitespace()?;
            set.order_by = Some(self.order_by()?);
        }

        if self.cursor.eat_spaced_keyword(Keyword::Offset) {
            self.cursor.expect_whitespace()?;
            set.offset = Some(self.cursor.scan_unsigned()?);
        }

        if self.cursor.eat_spaced_keyword(Keyword::Limit) {
            self.cursor.expect_whitespace()?;
            set.limit = Some(self.cursor.scan_unsigned()?);
        }

        self.reject_misplaced_clause()?;
        Ok(set)
    }

    /// Fails on a clause keyword left after the clause set: it was either
    /// repeated or written after a clause that must follow it.
    fn reject_misplaced_clause(&self) -> Result<(), ParseError> {
        let mut lookahead = self.cursor.clone();
        lookahead.skip_whitespace();
        let start = lookahead.pos();
        match CLAUSE_KEYWORDS.into_iter().find(|kw| lookahead.check_keyword(*kw)) {
            Some(keyword) => Err(lookahead.error(
                ParseErrorKind::Syntax,
                format!("{keyword} clause is repeated or out of order"),
                start,
            )),
            None => Ok(()),
        }
    }

    /// Parses `field (, field)*`. Whitespace around commas is optional.
    fn field_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut fields = vec![self.cursor.scan_identifier()?];
        loop {
            let before = self.cursor.pos();
            self.cursor.skip_whitespace();
            if !self.cursor.eat(",") {
                self.cursor.reset(before);
                return Ok(fields);
            }
            self.cursor.skip_whitespace();
            fields.push(self.cursor.scan_identifier()?);
        }
    }

    fn order_by(&mut self) -> Result<OrderBy, ParseError> {
        let field = self.cursor.scan_identifier()?;
        let direction = if self.cursor.eat_spaced_keyword(Keyword::Asc) {
            OrderDirection::Asc
        } else if self.cursor.eat_spaced_keyword(Keyword::Desc) {
            OrderDirection::Desc
        } else {
            return Err(self.cursor.unexpected("ASC or DESC"));
        };
        trace!(%field, %direction, "parsed ORDER BY");
        Ok(OrderBy::new(field, direction))
    }
}
