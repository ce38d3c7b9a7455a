//! Typed literal parsing.
//!
//! Value positions try, in order: `DATE '...'`, `TIMESTAMP '...'`, integer,
//! quoted string, boolean. The date forms come first so their quoted bodies
//! are never read as plain strings.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::parser::Parser;
use crate::ast::{Literal, Timestamp, MAX_FRACTION_DIGITS};
use crate::dialect::Dialect;
use crate::lexer::Keyword;

static DATE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date body pattern is valid")
});

static TIMESTAMP_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,6}))?$",
    )
    .expect("timestamp body pattern is valid")
});

/// Splits a `YYYY-MM-DD` body into its numeric groups.
fn date_parts(body: &str) -> Option<(i32, u32, u32)> {
    let caps = DATE_BODY.captures(body)?;
    Some((
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

/// Numeric groups of a timestamp body.
struct TimestampParts {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    fraction_micros: u32,
    precision: u8,
}

impl TimestampParts {
    fn from_body(body: &str) -> Option<Self> {
        let caps = TIMESTAMP_BODY.captures(body)?;
        let (fraction_micros, precision) = match caps.get(7) {
            Some(digits) => {
                let precision = u8::try_from(digits.as_str().len()).ok()?;
                let scale = 10_u32.pow(u32::from(MAX_FRACTION_DIGITS - precision));
                (digits.as_str().parse::<u32>().ok()? * scale, precision)
            }
            None => (0, 0),
        };
        Some(Self {
            year: caps[1].parse().ok()?,
            month: caps[2].parse().ok()?,
            day: caps[3].parse().ok()?,
            hour: caps[4].parse().ok()?,
            minute: caps[5].parse().ok()?,
            second: caps[6].parse().ok()?,
            fraction_micros,
            precision,
        })
    }

    fn build(&self) -> Option<Timestamp> {
        Timestamp::from_parts(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.fraction_micros,
            self.precision,
        )
    }
}

impl<D: Dialect> Parser<'_, D> {
    /// Parses a scalar literal at a value position.
    pub(super) fn literal(&mut self) -> Result<Literal, ParseError> {
        if let Some(date) = self.date_literal()? {
            return Ok(date);
        }
        if let Some(timestamp) = self.timestamp_literal()? {
            return Ok(timestamp);
        }
        if self.at_integer() {
            return Ok(Literal::Integer(self.cursor.scan_integer()?));
        }
        if self.cursor.peek() == Some('\'') {
            return Ok(Literal::Text(self.cursor.scan_string()?));
        }
        if let Some(value) = self.cursor.scan_boolean() {
            return Ok(Literal::Boolean(value));
        }
        Err(self.cursor.unexpected("literal"))
    }

    /// Parses `( literal, ... )` for membership tests. Only integers and
    /// quoted strings may appear in the list; `()` is allowed.
    pub(super) fn list_literal(&mut self) -> Result<Vec<Literal>, ParseError> {
        self.cursor.expect("(")?;
        self.cursor.skip_whitespace();

        let mut values = vec![];
        if self.cursor.eat(")") {
            return Ok(values);
        }

        loop {
            values.push(self.list_element()?);
            self.cursor.skip_whitespace();
            if self.cursor.eat(",") {
                self.cursor.skip_whitespace();
                continue;
            }
            if self.cursor.eat(")") {
                break;
            }
            return Err(self.cursor.unexpected("',' or ')'"));
        }

        trace!(count = values.len(), "parsed list literal");
        Ok(values)
    }

    fn list_element(&mut self) -> Result<Literal, ParseError> {
        if self.at_integer() {
            return Ok(Literal::Integer(self.cursor.scan_integer()?));
        }
        if self.cursor.peek() == Some('\'') {
            return Ok(Literal::Text(self.cursor.scan_string()?));
        }

        let start = self.cursor.pos();
        let mut lookahead = self.cursor.clone();
        let disallowed = [Keyword::Date, Keyword::Timestamp, Keyword::True, Keyword::False]
            .into_iter()
            .find(|kw| lookahead.eat_keyword(*kw));
        match disallowed {
            Some(kw) => Err(self.cursor.error(
                ParseErrorKind::Syntax,
                format!("{kw} literals are not allowed in a list; use integers or quoted strings"),
                start,
            )),
            None => Err(self.cursor.unexpected("integer or quoted string")),
        }
    }

    fn at_integer(&self) -> bool {
        match self.cursor.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Reads the quoted body following a `DATE`/`TIMESTAMP` keyword.
    fn prefixed_body(&mut self, keyword: Keyword) -> Result<Option<String>, ParseError> {
        if !self.cursor.eat_keyword(keyword) {
            return Ok(None);
        }
        self.cursor.skip_whitespace();
        if self.cursor.peek() != Some('\'') {
            return Err(self
                .cursor
                .unexpected(&format!("quoted {} value", keyword.as_str().to_lowercase())));
        }
        self.cursor.scan_string().map(Some)
    }

    fn date_literal(&mut self) -> Result<Option<Literal>, ParseError> {
        let start = self.cursor.pos();
        let Some(body) = self.prefixed_body(Keyword::Date)? else {
            return Ok(None);
        };
        let Some((year, month, day)) = date_parts(&body) else {
            return Err(self.cursor.error(
                ParseErrorKind::Lexical,
                format!("Malformed date literal '{body}': expected YYYY-MM-DD"),
                start,
            ));
        };
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Ok(Some(Literal::Date(date))),
            None => Err(self.cursor.error(
                ParseErrorKind::LiteralValue,
                format!("Invalid calendar date '{body}'"),
                start,
            )),
        }
    }

    fn timestamp_literal(&mut self) -> Result<Option<Literal>, ParseError> {
        let start = self.cursor.pos();
        let Some(body) = self.prefixed_body(Keyword::Timestamp)? else {
            return Ok(None);
        };
        let Some(parts) = TimestampParts::from_body(&body) else {
            return Err(self.cursor.error(
                ParseErrorKind::Lexical,
                format!(
                    "Malformed timestamp literal '{body}': expected YYYY-MM-DD HH:MM:SS[.ffffff]"
                ),
                start,
            ));
        };
        match parts.build() {
            Some(timestamp) => Ok(Some(Literal::Timestamp(timestamp))),
            None => Err(self.cursor.error(
                ParseErrorKind::LiteralValue,
                format!("Invalid timestamp '{body}'"),
                start,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::ExpressionDialect;

    fn literal(input: &str) -> Result<Literal, ParseError> {
        Parser::new(input, ExpressionDialect).parse_literal()
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(literal("42").unwrap(), Literal::Integer(42));
        assert_eq!(literal("-42").unwrap(), Literal::Integer(-42));
        assert_eq!(literal("'x'").unwrap(), Literal::text("x"));
        assert_eq!(literal("false").unwrap(), Literal::Boolean(false));
        assert_eq!(
            literal("DATE '2024-02-29'").unwrap(),
            Literal::date(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_date_body_is_not_a_string() {
        assert!(matches!(literal("DATE '2020-01-01'").unwrap(), Literal::Date(_)));
        assert_eq!(
            literal("'2020-01-01'").unwrap(),
            Literal::text("2020-01-01")
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert!(literal("DATE '2024-02-30'").unwrap_err().is_literal_value());
        assert!(literal("DATE '2023-02-29'").unwrap_err().is_literal_value());
        assert!(literal("DATE '2024-13-01'").unwrap_err().is_literal_value());
        assert!(literal("DATE '2024-1-01'").unwrap_err().is_lexical());
        assert!(literal("DATE 2024-01-01").unwrap_err().is_syntax());
        assert!(literal("DATE '2024-01-01").unwrap_err().is_lexical());
    }

    #[test]
    fn test_timestamp_without_fraction() {
        let Literal::Timestamp(ts) = literal("TIMESTAMP '2024-03-01 12:30:45'").unwrap() else {
            panic!("Expected timestamp literal");
        };
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 30, 45));
        assert_eq!(ts.fraction_micros(), 0);
        assert_eq!(ts.precision(), 0);
    }

    #[test]
    fn test_timestamp_fraction_scaling() {
        let cases = [
            (".5", 500_000, 1),
            (".05", 50_000, 2),
            (".123", 123_000, 3),
            (".000001", 1, 6),
            (".999999", 999_999, 6),
        ];
        for (fraction, micros, precision) in cases {
            let input = format!("TIMESTAMP '2024-03-01 00:00:00{fraction}'");
            let Literal::Timestamp(ts) = literal(&input).unwrap() else {
                panic!("Expected timestamp literal for {input}");
            };
            assert_eq!(ts.fraction_micros(), micros, "{input}");
            assert_eq!(ts.precision(), precision, "{input}");
        }
    }

    #[test]
    fn test_invalid_timestamps() {
        assert!(literal("TIMESTAMP '2024-03-01 24:00:00'")
            .unwrap_err()
            .is_literal_value());
        assert!(literal("TIMESTAMP '2024-03-01 10:60:00'")
            .unwrap_err()
            .is_literal_value());
        assert!(literal("TIMESTAMP '2024-03-01 10:00:00.1234567'")
            .unwrap_err()
            .is_lexical());
        assert!(literal("TIMESTAMP '2024-03-01T10:00:00'")
            .unwrap_err()
            .is_lexical());
    }

    #[test]
    fn test_lists() {
        assert_eq!(literal("()").unwrap(), Literal::List(vec![]));
        assert_eq!(literal("( )").unwrap(), Literal::List(vec![]));
        assert_eq!(
            literal("( 1 ,'a' , -2 )").unwrap(),
            Literal::List(vec![
                Literal::Integer(1),
                Literal::text("a"),
                Literal::Integer(-2)
            ])
        );
    }

    #[test]
    fn test_list_rejects_other_literals() {
        let err = literal("(true)").unwrap_err();
        assert!(err.is_syntax());
        assert!(err.message.contains("not allowed in a list"));
        assert!(literal("(DATE '2024-01-01')").unwrap_err().is_syntax());
        assert!(literal("(1,)").unwrap_err().is_syntax());
        assert!(literal("(1 2)").unwrap_err().is_syntax());
        assert!(literal("(1").unwrap_err().is_syntax());
    }

    #[test]
    fn test_no_literal() {
        assert!(literal("status").unwrap_err().is_syntax());
        assert!(literal("TRUE").unwrap_err().is_syntax());
    }
}
