//! Lexical primitives for the filter grammar.
//!
//! This module provides a byte cursor with the scanning operations the
//! grammar needs: whitespace, identifiers, quoted strings, integers,
//! booleans and keywords.

mod cursor;
mod keyword;
mod span;

pub use cursor::{is_identifier_continue, is_identifier_start, is_whitespace, Cursor};
pub use keyword::Keyword;
pub use span::Span;
