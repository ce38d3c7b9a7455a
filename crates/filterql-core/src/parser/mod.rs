//! Filter grammar parser.
//!
//! A hand-written recursive descent parser working directly on a byte
//! cursor. Conjunction chains are read left to right without precedence.

mod clause;
mod condition;
mod error;
mod literal;
#[allow(clippy::module_inception)]
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
