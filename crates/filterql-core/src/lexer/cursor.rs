//! Character-level scanning over the filter text.
//!
//! The grammar is scanned directly at a byte cursor rather than from a
//! pre-built token stream: whether whitespace is required, and whether `.`
//! continues an identifier, depends on the grammar position and dialect.

use super::{Keyword, Span};
use crate::parser::{ParseError, ParseErrorKind};

/// Returns true for the whitespace characters the grammar skips.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Returns true if `c` may start an identifier.
#[must_use]
pub const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` may continue an identifier (ignoring dots).
#[must_use]
pub const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A cursor over the filter text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Whether `.` may continue an identifier.
    dotted_identifiers: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            dotted_identifiers: false,
        }
    }

    /// Allows or forbids `.` inside identifiers.
    #[must_use]
    pub const fn with_dotted_identifiers(mut self, enabled: bool) -> Self {
        self.dotted_identifiers = enabled;
        self
    }

    /// Returns the full input.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back to a previously saved position.
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(pos <= self.input.len());
        self.pos = pos;
    }

    /// Returns the unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the input from `start` to the end.
    #[must_use]
    pub fn residual(&self, start: usize) -> &'a str {
        self.input.get(start..).unwrap_or("")
    }

    /// Returns true when the whole input has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the current character without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character after the current one without advancing.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Creates a span from `start` to the current position.
    #[must_use]
    pub const fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    /// Creates an error of the given kind spanning `start..pos`.
    #[must_use]
    pub fn error(
        &self,
        kind: ParseErrorKind,
        message: impl Into<String>,
        start: usize,
    ) -> ParseError {
        ParseError::new(kind, message, self.span_from(start), self.residual(start))
    }

    /// Creates an "expected ..." syntax error at the current position.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, Span::point(self.pos), self.rest())
    }

    /// Skips any run of whitespace and returns how many bytes were skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
        self.pos - start
    }

    /// Skips a non-empty run of whitespace.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if no whitespace is present.
    pub fn expect_whitespace(&mut self) -> Result<(), ParseError> {
        if self.skip_whitespace() == 0 {
            return Err(self.unexpected("whitespace"));
        }
        Ok(())
    }

    /// Consumes `symbol` if the input continues with it.
    pub fn eat(&mut self, symbol: &str) -> bool {
        if self.rest().starts_with(symbol) {
            self.pos += symbol.len();
            true
        } else {
            false
        }
    }

    /// Consumes `symbol` or fails.
    ///
    /// # Errors
    ///
    /// Returns a syntax error naming the missing symbol.
    pub fn expect(&mut self, symbol: &str) -> Result<(), ParseError> {
        if self.eat(symbol) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{symbol}'")))
        }
    }

    /// Consumes `keyword` if the input continues with it.
    ///
    /// Each word must be followed by something that cannot continue an
    /// identifier. On failure the cursor is left where it was.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        let start = self.pos;
        for (i, word) in keyword.words().enumerate() {
            if i > 0 && self.skip_whitespace() == 0 {
                self.pos = start;
                return false;
            }
            if !self.rest().starts_with(word) {
                self.pos = start;
                return false;
            }
            self.pos += word.len();
            if self.peek().is_some_and(|c| self.continues_identifier(c)) {
                self.pos = start;
                return false;
            }
        }
        true
    }

    /// Returns true if the input continues with `keyword`, without consuming it.
    #[must_use]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.clone().eat_keyword(keyword)
    }

    /// Consumes `keyword` or fails.
    ///
    /// # Errors
    ///
    /// Returns a syntax error naming the missing keyword.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Consumes optional whitespace followed by `keyword`.
    ///
    /// At least one whitespace character is required unless the previous
    /// character cannot continue an identifier. The cursor is restored on
    /// failure.
    pub fn eat_spaced_keyword(&mut self, keyword: Keyword) -> bool {
        let start = self.pos;
        let skipped = self.skip_whitespace();
        if skipped == 0 && self.previous_continues_identifier() {
            return false;
        }
        if self.eat_keyword(keyword) {
            true
        } else {
            self.pos = start;
            false
        }
    }

    fn continues_identifier(&self, c: char) -> bool {
        is_identifier_continue(c) || (self.dotted_identifiers && c == '.')
    }

    fn previous_continues_identifier(&self) -> bool {
        self.input[..self.pos]
            .chars()
            .next_back()
            .is_some_and(|c| is_identifier_continue(c) || c == '\'')
    }

    /// Scans an identifier.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if the current character cannot start an
    /// identifier. Keywords are not reserved here; callers try keywords
    /// first where one is grammatical.
    pub fn scan_identifier(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if is_identifier_start(c) => {
                self.advance();
            }
            Some(c) => {
                return Err(self.error(
                    ParseErrorKind::Lexical,
                    format!("Invalid identifier start: '{c}'"),
                    start,
                ));
            }
            None => return Err(self.unexpected("identifier")),
        }

        while self.peek().is_some_and(|c| self.continues_identifier(c)) {
            self.advance();
        }

        Ok(self.input[start..self.pos].to_string())
    }

    /// Scans a single-quoted string literal. There are no escape sequences.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the cursor is not at a quote and a lexical
    /// error if the closing quote is missing.
    pub fn scan_string(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        if self.peek() != Some('\'') {
            return Err(self.unexpected("quoted string"));
        }
        self.advance(); // opening quote
        let content_start = self.pos;

        loop {
            match self.advance() {
                Some('\'') => break,
                Some(_) => {}
                None => {
                    return Err(self.error(
                        ParseErrorKind::Lexical,
                        "Unterminated string literal",
                        start,
                    ));
                }
            }
        }

        Ok(self.input[content_start..self.pos - 1].to_string())
    }

    /// Scans an optionally negative integer.
    ///
    /// # Errors
    ///
    /// Returns a syntax error when no digits are present and a lexical error
    /// when the digits do not fit in an `i64`.
    pub fn scan_integer(&mut self) -> Result<i64, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.scan_digits(start)?;

        let text = &self.input[start..self.pos];
        text.parse::<i64>().map_err(|e| {
            self.error(
                ParseErrorKind::Lexical,
                format!("Invalid integer '{text}': {e}"),
                start,
            )
        })
    }

    /// Scans an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns a syntax error when no digits are present and a literal value
    /// error when the number does not fit in a `u64`.
    pub fn scan_unsigned(&mut self) -> Result<u64, ParseError> {
        let start = self.pos;
        self.scan_digits(start)?;

        let text = &self.input[start..self.pos];
        text.parse::<u64>().map_err(|e| {
            self.error(
                ParseErrorKind::LiteralValue,
                format!("Invalid count '{text}': {e}"),
                start,
            )
        })
    }

    fn scan_digits(&mut self, start: usize) -> Result<(), ParseError> {
        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.pos == digits_start {
            self.pos = start;
            return Err(self.unexpected("digits"));
        }
        if self.peek().is_some_and(is_identifier_start) {
            let err = self.error(
                ParseErrorKind::Lexical,
                "Invalid digit sequence",
                start,
            );
            self.pos = start;
            return Err(err);
        }
        Ok(())
    }

    /// Scans `true` or `false`.
    pub fn scan_boolean(&mut self) -> Option<bool> {
        if self.eat_keyword(Keyword::True) {
            Some(true)
        } else if self.eat_keyword(Keyword::False) {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n x");
        assert_eq!(cursor.skip_whitespace(), 5);
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.skip_whitespace(), 0);
    }

    #[test]
    fn test_expect_whitespace_requires_one_char() {
        let mut cursor = Cursor::new("x");
        let err = cursor.expect_whitespace().unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_identifiers() {
        let mut cursor = Cursor::new("user_id2 rest");
        assert_eq!(cursor.scan_identifier().unwrap(), "user_id2");
        assert_eq!(cursor.rest(), " rest");
    }

    #[test]
    fn test_dotted_identifier_only_when_enabled() {
        let mut plain = Cursor::new("address.city");
        assert_eq!(plain.scan_identifier().unwrap(), "address");

        let mut dotted = Cursor::new("address.city").with_dotted_identifiers(true);
        assert_eq!(dotted.scan_identifier().unwrap(), "address.city");
    }

    #[test]
    fn test_identifier_bad_start() {
        let err = Cursor::new("9lives").scan_identifier().unwrap_err();
        assert!(err.is_lexical());
    }

    #[test]
    fn test_keywords_scan_as_identifiers() {
        let mut cursor = Cursor::new("WHERE = 1");
        assert_eq!(cursor.scan_identifier().unwrap(), "WHERE");
        assert_eq!(cursor.rest(), " = 1");
        assert_eq!(Cursor::new("LIMIT").scan_identifier().unwrap(), "LIMIT");
        assert_eq!(Cursor::new("true").scan_identifier().unwrap(), "true");
    }

    #[test]
    fn test_strings() {
        let mut cursor = Cursor::new("'hello world'x");
        assert_eq!(cursor.scan_string().unwrap(), "hello world");
        assert_eq!(cursor.rest(), "x");
        assert_eq!(Cursor::new("''").scan_string().unwrap(), "");
    }

    #[test]
    fn test_unterminated_string() {
        let err = Cursor::new("'open").scan_string().unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.residual, "'open");
    }

    #[test]
    fn test_integers() {
        assert_eq!(Cursor::new("42").scan_integer().unwrap(), 42);
        assert_eq!(Cursor::new("-7").scan_integer().unwrap(), -7);
        assert_eq!(
            Cursor::new("-9223372036854775808").scan_integer().unwrap(),
            i64::MIN
        );
        assert!(Cursor::new("99999999999999999999")
            .scan_integer()
            .unwrap_err()
            .is_lexical());
        assert!(Cursor::new("12ab").scan_integer().unwrap_err().is_lexical());
        assert!(Cursor::new("-").scan_integer().unwrap_err().is_syntax());
    }

    #[test]
    fn test_unsigned() {
        assert_eq!(Cursor::new("10").scan_unsigned().unwrap(), 10);
        assert!(Cursor::new("-1").scan_unsigned().unwrap_err().is_syntax());
    }

    #[test]
    fn test_booleans_are_case_sensitive() {
        assert_eq!(Cursor::new("true").scan_boolean(), Some(true));
        assert_eq!(Cursor::new("false)").scan_boolean(), Some(false));
        assert_eq!(Cursor::new("TRUE").scan_boolean(), None);
        assert_eq!(Cursor::new("trueish").scan_boolean(), None);
    }

    #[test]
    fn test_keyword_boundaries() {
        let mut cursor = Cursor::new("NOTE");
        assert!(!cursor.eat_keyword(Keyword::Not));
        assert_eq!(cursor.pos(), 0);

        let mut cursor = Cursor::new("NOT x");
        assert!(cursor.eat_keyword(Keyword::Not));
        assert_eq!(cursor.rest(), " x");
    }

    #[test]
    fn test_multi_word_keyword_whitespace() {
        let mut cursor = Cursor::new("IS  \t NOT\nNULL");
        assert!(cursor.eat_keyword(Keyword::IsNotNull));
        assert!(cursor.is_at_end());

        let mut cursor = Cursor::new("IS NULL");
        assert!(!cursor.eat_keyword(Keyword::IsNotNull));
        assert_eq!(cursor.pos(), 0);
        assert!(cursor.eat_keyword(Keyword::IsNull));
    }

    #[test]
    fn test_spaced_keyword_needs_separator_after_word() {
        let mut cursor = Cursor::new("1 AND");
        cursor.scan_integer().unwrap();
        assert!(cursor.eat_spaced_keyword(Keyword::And));

        let mut cursor = Cursor::new("1AND");
        cursor.scan_integer().unwrap_err();
        let mut cursor = Cursor::new("x)AND");
        cursor.scan_identifier().unwrap();
        cursor.expect(")").unwrap();
        assert!(cursor.eat_spaced_keyword(Keyword::And));
    }
}
