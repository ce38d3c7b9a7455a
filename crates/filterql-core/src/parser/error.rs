//! Parser error types.

use core::fmt;

use crate::lexer::Span;

/// The category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A malformed token: bad identifier start, unterminated string,
    /// invalid digit sequence, malformed date body.
    Lexical,
    /// An expected keyword, operator or punctuation was not found.
    Syntax,
    /// A well-formed literal that does not denote a value, such as
    /// `DATE '2024-02-30'`.
    LiteralValue,
    /// The grammar matched a prefix of the input and text remains.
    TrailingInput,
}

impl ParseErrorKind {
    /// Returns a short human readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::LiteralValue => "invalid literal value",
            Self::TrailingInput => "trailing input",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message} at position {}..{}", .span.start, .span.end)]
pub struct ParseError {
    /// The failure category.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// The input left unparsed from the start of the error.
    pub residual: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        span: Span,
        residual: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            residual: residual.into(),
        }
    }

    /// Creates an "unexpected input" syntax error.
    #[must_use]
    pub fn unexpected(expected: &str, span: Span, residual: &str) -> Self {
        let message = if residual.is_empty() {
            format!("Unexpected end of input: expected {expected}")
        } else {
            format!(
                "Unexpected input: expected {expected}, found '{}'",
                snippet(residual)
            )
        };
        Self::new(ParseErrorKind::Syntax, message, span, residual)
    }

    /// Creates a trailing input error.
    #[must_use]
    pub fn trailing(span: Span, residual: &str) -> Self {
        Self::new(
            ParseErrorKind::TrailingInput,
            format!("Unexpected trailing input '{}'", snippet(residual)),
            span,
            residual,
        )
    }

    /// Returns true if this is a lexical error.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lexical)
    }

    /// Returns true if this is a syntax error.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Syntax)
    }

    /// Returns true if this is a literal value error.
    #[must_use]
    pub const fn is_literal_value(&self) -> bool {
        matches!(self.kind, ParseErrorKind::LiteralValue)
    }

    /// Returns true if this is a trailing input error.
    #[must_use]
    pub const fn is_trailing_input(&self) -> bool {
        matches!(self.kind, ParseErrorKind::TrailingInput)
    }
}

/// Shortens the residual input for messages.
fn snippet(residual: &str) -> String {
    const MAX: usize = 24;
    let mut chars = residual.chars();
    let head: String = chars.by_ref().take(MAX).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
