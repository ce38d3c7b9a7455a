//! Parser state and entry points.

use tracing::debug;

use super::error::{ParseError, ParseErrorKind};
use crate::ast::{ClauseSet, ConditionChain, Literal};
use crate::dialect::Dialect;
use crate::lexer::{Cursor, Span};

/// Default limit on nested parenthesized groups.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Filter grammar parser.
///
/// A parser owns its cursor over one input text; every entry point must
/// consume the whole input or fail.
pub struct Parser<'a, D: Dialect> {
    pub(super) cursor: Cursor<'a>,
    pub(super) dialect: D,
    /// Current group nesting.
    depth: usize,
    max_depth: usize,
}

impl<'a, D: Dialect> Parser<'a, D> {
    /// Creates a new parser for the given input and dialect.
    #[must_use]
    pub fn new(input: &'a str, dialect: D) -> Self {
        let cursor = Cursor::new(input).with_dotted_identifiers(dialect.allows_dotted_identifiers());
        Self {
            cursor,
            dialect,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the limit on nested parenthesized groups.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the dialect this parser was created with.
    #[must_use]
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Parses the whole input as a condition chain.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid chain in this
    /// parser's dialect or if input remains after the chain.
    pub fn parse_chain(&mut self) -> Result<ConditionChain, ParseError> {
        debug!(
            dialect = self.dialect.name(),
            len = self.cursor.input().len(),
            "parsing condition chain"
        );
        let result = self.parse_all(Self::chain);
        if let Ok(chain) = &result {
            debug!(links = chain.len(), depth = chain.depth(), "parsed condition chain");
        }
        result
    }

    /// Parses the whole input as a SELECT clause set.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the dialect does not support clauses, if
    /// the input is not a valid clause set, or if input remains after it.
    pub fn parse_clause_set(&mut self) -> Result<ClauseSet, ParseError> {
        debug!(
            dialect = self.dialect.name(),
            len = self.cursor.input().len(),
            "parsing clause set"
        );
        if !self.dialect.supports_clauses() {
            let err = ParseError::new(
                ParseErrorKind::Syntax,
                format!(
                    "The {} dialect does not accept SELECT clauses",
                    self.dialect.name()
                ),
                Span::point(self.cursor.pos()),
                self.cursor.rest(),
            );
            debug!(error = %err, "parse failed");
            return Err(err);
        }
        self.parse_all(Self::clause_set)
    }

    /// Parses the whole input as one literal. A parenthesized list yields
    /// [`Literal::List`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one literal.
    pub fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        self.parse_all(|parser| {
            if parser.cursor.peek() == Some('(') {
                parser.list_literal().map(Literal::List)
            } else {
                parser.literal()
            }
        })
    }

    /// Runs `rule` over the whole input, skipping surrounding whitespace.
    fn parse_all<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.cursor.skip_whitespace();
        let result = rule(self).and_then(|value| {
            self.finish()?;
            Ok(value)
        });
        if let Err(err) = &result {
            debug!(kind = %err.kind, error = %err, "parse failed");
        }
        result
    }

    /// Checks that nothing but whitespace remains. A leftover `)` closes a
    /// group that was never opened.
    fn finish(&mut self) -> Result<(), ParseError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return Ok(());
        }
        let start = self.cursor.pos();
        if self.cursor.eat(")") {
            return Err(self
                .cursor
                .error(ParseErrorKind::Syntax, "Unmatched ')'", start));
        }
        let span = Span::new(start, self.cursor.input().len());
        Err(ParseError::trailing(span, self.cursor.rest()))
    }

    /// Enters one level of group nesting.
    pub(super) fn enter_group(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.cursor.error(
                ParseErrorKind::Syntax,
                format!("Groups nested deeper than {} levels", self.max_depth),
                self.cursor.pos(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of group nesting.
    pub(super) fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
