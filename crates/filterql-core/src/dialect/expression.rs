//! Standalone WHERE-expression dialect.

use super::Dialect;

/// The WHERE-expression dialect: parenthesized groups (optionally negated),
/// dotted field names, no clause keywords.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionDialect;

impl ExpressionDialect {
    /// Creates the expression dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for ExpressionDialect {
    fn name(&self) -> &'static str {
        "expression"
    }

    fn allows_grouping(&self) -> bool {
        true
    }

    fn allows_dotted_identifiers(&self) -> bool {
        true
    }
}
